//! Plain predicates used to validate chain inputs.

use crate::{LinkModel, LinkConvention};

/// `true` if every link shares one convention.
///
/// An empty sequence has no conflicting convention and is accepted.
pub fn is_same_link_conventions<L: LinkModel>(links: &[L]) -> bool {
    let mut conventions = links.iter().map(LinkModel::convention);
    match conventions.next() {
        Some(first) => conventions.all(|c: LinkConvention| c == first),
        None => true,
    }
}

/// `true` if `seq` holds exactly `expected` elements.
pub fn is_sequence_length_correct<T>(seq: &[T], expected: usize) -> bool {
    seq.len() == expected
}
