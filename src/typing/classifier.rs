/// Decides whether `typed` counts as correct at a position expecting `expected`.
///
/// Normal mode is exact equality. Cheat mode accepts every key except a
/// backslash typed where something other than a backslash was expected.
#[inline]
pub fn is_correct(expected: char, typed: char, cheat_mode: bool) -> bool {
    if cheat_mode {
        !(typed == '\\' && expected != '\\')
    } else {
        typed == expected
    }
}
