use super::template::LayoutTemplate;
use crate::layouts::Layout;
use fastrand::Rng;

/// One individual: the template's letters shuffled into its letter slots,
/// fixed slots untouched.
pub fn random_layout(template: &LayoutTemplate, rng: &mut Rng) -> Layout {
    let mut letters = template.alphabet().to_vec();
    rng.shuffle(&mut letters);
    template.with_letters(&letters)
}

pub fn random_population(template: &LayoutTemplate, size: usize, rng: &mut Rng) -> Vec<Layout> {
    (0..size).map(|_| random_layout(template, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_individual_conforms() {
        let template = LayoutTemplate::qwerty();
        let mut rng = Rng::with_seed(1234);
        let population = random_population(&template, 50, &mut rng);
        assert_eq!(population.len(), 50);
        for layout in &population {
            assert!(template.conforms(layout), "{} broke the template", layout);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let template = LayoutTemplate::qwerty();
        let a = random_population(&template, 10, &mut Rng::with_seed(7));
        let b = random_population(&template, 10, &mut Rng::with_seed(7));
        assert_eq!(a, b);
    }
}
