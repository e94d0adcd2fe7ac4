//! Randomized persona selection without immediate repeats

use super::entities::PersonaId;
use super::random::RandomSource;

/// Pick the next persona for a random walk.
///
/// The persona used on the previous step is excluded whenever at least two
/// distinct personas are eligible. Returns `None` only when `eligible` is
/// empty.
pub fn select_next_persona(
    eligible: &[PersonaId],
    previous: Option<PersonaId>,
    random: &dyn RandomSource,
) -> Option<PersonaId> {
    let mut candidates: Vec<PersonaId> = Vec::with_capacity(eligible.len());
    for id in eligible {
        if !candidates.contains(id) {
            candidates.push(*id);
        }
    }

    if candidates.len() >= 2
        && let Some(prev) = previous
    {
        candidates.retain(|id| *id != prev);
    }

    if candidates.is_empty() {
        return None;
    }
    let index = random.next_index(candidates.len()) % candidates.len();
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::random::FirstChoice;

    #[test]
    fn test_excludes_previous_persona() {
        let next = select_next_persona(
            &PersonaId::ALL,
            Some(PersonaId::Creative),
            &FirstChoice,
        );
        assert_eq!(next, Some(PersonaId::Reasoning));
    }

    #[test]
    fn test_single_persona_may_repeat() {
        let next = select_next_persona(
            &[PersonaId::Logical],
            Some(PersonaId::Logical),
            &FirstChoice,
        );
        assert_eq!(next, Some(PersonaId::Logical));
    }

    #[test]
    fn test_duplicate_entries_count_once() {
        let next = select_next_persona(
            &[PersonaId::Logical, PersonaId::Logical],
            Some(PersonaId::Logical),
            &FirstChoice,
        );
        assert_eq!(next, Some(PersonaId::Logical));
    }

    #[test]
    fn test_empty_eligible_set() {
        assert_eq!(select_next_persona(&[], None, &FirstChoice), None);
    }
}
