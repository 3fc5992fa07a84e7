// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish
// one goal per command.
//
// Rules for this layer:
//   - No parsing or encoding logic here (that's Layer 4)
//   - No argument parsing or printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Config + vocabulary → folds + embedding table
pub mod prepare_use_case;

// Prepared folds → JSON files on disk
pub mod export_use_case;

// Majority-label baseline → id/gold/predicted file
pub mod baseline_use_case;
