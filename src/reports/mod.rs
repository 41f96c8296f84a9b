mod grid;
mod tables;

pub use self::grid::print_layout as print_layout_grid;
pub use self::tables::{
    bigrams as print_bigram_report, fitness as print_fitness_report,
    session as print_session_report,
};
