/// Integration guides for the SpaceTraders SDK.
///
/// Each sub-module contains a standalone guide rendered from Markdown.
///
/// # Available Guides
///
/// | Guide | Description |
/// |-------|-------------|
/// | [`error_handling`] | Error variants, cooldown responses, and recovery patterns |
/// | [`pagination`] | Walking list endpoints with [`PageQuery`](crate::PageQuery) |

/// Error variant reference, matching specific failures, reading upstream
/// error payloads, and handling cooldowns without retrying blindly.
#[doc = include_str!("../docs/guides/error-handling.md")]
pub mod error_handling {}

/// Page and limit semantics, the `meta` block, and draining a full list.
#[doc = include_str!("../docs/guides/pagination.md")]
pub mod pagination {}
