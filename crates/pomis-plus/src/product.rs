//! Cartesian products over per-step choice lists.

use pomis_core::VarSet;

/// Call `visit` once per element of `choices[0] × choices[1] × ...`,
/// in odometer order (last position changes fastest). Nothing is visited
/// if any position has no choices.
pub(crate) fn for_each_combination<F, E>(choices: &[Vec<VarSet>], mut visit: F) -> Result<(), E>
where
    F: FnMut(Vec<VarSet>) -> Result<(), E>,
{
    if choices.iter().any(Vec::is_empty) {
        return Ok(());
    }
    let mut cursor = vec![0usize; choices.len()];
    loop {
        visit(
            cursor
                .iter()
                .zip(choices)
                .map(|(&i, options)| options[i].clone())
                .collect(),
        )?;

        // Advance the odometer.
        let mut pos = choices.len();
        loop {
            if pos == 0 {
                return Ok(());
            }
            pos -= 1;
            cursor[pos] += 1;
            if cursor[pos] < choices[pos].len() {
                break;
            }
            cursor[pos] = 0;
        }
    }
}
