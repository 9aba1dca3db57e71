use rand::Rng;

use crate::AutomatonSpecification;
use crate::Label;

/// Returns the symbols 'a', 'b', ... used by the random automata.
pub fn random_alphabet(num_of_symbols: u32) -> Vec<char> {
    assert!(
        num_of_symbols <= 26,
        "Too many symbols requested, we only support alphabetic symbols."
    );

    (0..num_of_symbols)
        .map(|i| char::from_digit(i + 10, 36).expect("Radix is less than 37, so should not panic"))
        .collect()
}

/// Generates a nondeterministic automaton with the desired number of states,
/// symbols and maximum out degree. If `epsilon` is true a part of the
/// transitions are epsilon transitions, which can form cycles.
pub fn random_nfa(
    rng: &mut impl Rng,
    num_of_states: usize,
    num_of_symbols: u32,
    outdegree: usize,
    epsilon: bool,
) -> AutomatonSpecification<char> {
    assert!(num_of_states > 0, "An automaton requires at least the initial state");
    let alphabet = random_alphabet(num_of_symbols);

    let mut relation = Vec::new();
    for from in 0..num_of_states {
        for _ in 0..rng.random_range(0..=outdegree) {
            let label = if alphabet.is_empty() || (epsilon && rng.random_bool(0.25)) {
                Label::Epsilon
            } else {
                Label::Symbol(alphabet[rng.random_range(0..alphabet.len())])
            };
            let to = rng.random_range(0..num_of_states);

            relation.push((state_name(from), label, state_name(to)));
        }
    }

    AutomatonSpecification::new(
        alphabet,
        state_name(0),
        random_accept_states(rng, num_of_states),
        relation,
    )
}

/// Generates a complete deterministic automaton, every state has exactly one
/// outgoing transition for every symbol and there are no epsilon transitions.
pub fn random_dfa(rng: &mut impl Rng, num_of_states: usize, num_of_symbols: u32) -> AutomatonSpecification<char> {
    assert!(num_of_states > 0, "An automaton requires at least the initial state");
    let alphabet = random_alphabet(num_of_symbols);

    let mut relation = Vec::new();
    for from in 0..num_of_states {
        for symbol in &alphabet {
            let to = rng.random_range(0..num_of_states);
            relation.push((state_name(from), Label::Symbol(*symbol), state_name(to)));
        }
    }

    AutomatonSpecification::new(
        alphabet,
        state_name(0),
        random_accept_states(rng, num_of_states),
        relation,
    )
}

/// Returns a random word of the given length over the given alphabet.
pub fn random_word(rng: &mut impl Rng, alphabet: &[char], length: usize) -> Vec<char> {
    if alphabet.is_empty() {
        return Vec::new();
    }

    (0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

fn random_accept_states(rng: &mut impl Rng, num_of_states: usize) -> Vec<String> {
    (0..num_of_states)
        .filter(|_| rng.random_bool(0.3))
        .map(state_name)
        .collect()
}

fn state_name(index: usize) -> String {
    format!("s{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use fasim_utilities::random_test;

    #[test]
    fn test_random_dfa_is_complete() {
        random_test(100, |rng| {
            let specification = random_dfa(rng, 5, 3);

            assert_eq!(specification.relation.len(), 5 * 3);
            assert!(specification.relation.iter().all(|(_, label, _)| !label.is_epsilon()));
        });
    }

    #[test]
    fn test_random_word() {
        random_test(100, |rng| {
            let alphabet = random_alphabet(2);
            let word = random_word(rng, &alphabet, 10);

            assert_eq!(word.len(), 10);
            assert!(word.iter().all(|symbol| *symbol == 'a' || *symbol == 'b'));
        });
    }
}
