//! Starter document for development builds.

/// Block markup injected when a development build launches the editor
/// with no content of its own.
///
/// The serialized form is the editor's persisted format: per-block HTML
/// framed by `<!-- block:... -->` delimiter comments carrying the block
/// name and its attribute JSON.
pub const STARTER_CONTENT: &str = r#"<!-- block:heading {"level":2} -->
<h2>Getting started</h2>
<!-- /block:heading -->

<!-- block:paragraph -->
<p>This is a development build of the mobile editor, pre-filled with a sample document so every block tool has something to chew on.</p>
<!-- /block:paragraph -->

<!-- block:list -->
<ul><li>Tap a paragraph to edit it.</li><li>Use the inserter to add new blocks.</li><li>Long-press a block to move or remove it.</li></ul>
<!-- /block:list -->

<!-- block:quote -->
<blockquote><p>Everything in this document is a block.</p></blockquote>
<!-- /block:quote -->

<!-- block:separator -->
<hr />
<!-- /block:separator -->
"#;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_starter_content_is_balanced_block_markup() {
		let opens = STARTER_CONTENT.matches("<!-- block:").count();
		let closes = STARTER_CONTENT.matches("<!-- /block:").count();
		assert_eq!(opens, closes);
		assert!(opens >= 4);
	}
}
