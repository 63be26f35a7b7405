use crate::types::Action;

/// Flat program representation
///
/// A solved exercise can be expressed two ways: as a tree of blocks (what
/// the player sees in the editor) or as the ordered list of primitive
/// actions the program performs. The flat form has no nesting, so
/// positional mutations are plain `Vec` edits:
/// - inserting a redundant pair is two `insert` calls at one index
/// - any index in `[0, len]` is a valid insertion point
///
/// Conversion between the two forms belongs to the upstream synthesizer
/// and downstream serializer, not to this crate.
pub type ActionSequence = Vec<Action>;
