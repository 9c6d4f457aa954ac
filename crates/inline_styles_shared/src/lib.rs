//! Shared constants across the inline styles project.

/// The tag name of the emitted node.
pub const STYLE_TAG: &str = "style";

/// The attribute every emitted `<style>` node is tagged with.
/// Used to find (and clean up) nodes produced by this library.
pub const MARKER_ATTRIBUTE: &str = "data-inline-styles";

/// The value of [`MARKER_ATTRIBUTE`].
pub const MARKER_VALUE: &str = "inline";

/// The content security policy nonce attribute.
pub const NONCE_ATTRIBUTE: &str = "nonce";
