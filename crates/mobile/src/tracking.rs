//! Default tracking table for block-editor actions.

use mosaic_tracking::TrackingTable;

/// Namespace key of the embedded block editor's store.
pub const BLOCK_EDITOR: &str = "core/block-editor";

/// The block mutations the mobile apps report on, mapped to their event
/// labels. Structural edits only; selection and focus actions stay
/// untracked.
pub fn default_tracking_table() -> TrackingTable {
	TrackingTable::builder()
		.label(BLOCK_EDITOR, "moveBlocksUp", "editor_blocks_moved_up")
		.label(BLOCK_EDITOR, "moveBlocksDown", "editor_blocks_moved_down")
		.label(BLOCK_EDITOR, "removeBlock", "editor_block_removed")
		.label(BLOCK_EDITOR, "removeBlocks", "editor_blocks_removed")
		.label(BLOCK_EDITOR, "moveBlockToPosition", "editor_block_moved_to_position")
		.label(BLOCK_EDITOR, "insertBlock", "editor_block_inserted")
		.label(BLOCK_EDITOR, "insertBlocks", "editor_blocks_inserted")
		.label(BLOCK_EDITOR, "replaceBlock", "editor_block_replaced")
		.label(BLOCK_EDITOR, "replaceBlocks", "editor_blocks_replaced")
		.label(BLOCK_EDITOR, "replaceInnerBlocks", "editor_inner_blocks_replaced")
		.build()
}
