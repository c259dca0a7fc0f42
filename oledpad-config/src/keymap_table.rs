//! Text rendering of the compiled-in board keymaps.

use std::fmt::Write;

use oledpad_common::{boards::Board, keymap::KeymapView};

/// One layer as rows of key names, columns padded to line up.
pub fn layer_table(keymap: &dyn KeymapView, layer: u8) -> String {
    let cells: Vec<Vec<String>> = (0..keymap.rows())
        .map(|row| {
            (0..keymap.cols())
                .map(|col| keymap.action(layer, row, col).to_string())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..keymap.cols())
        .map(|col| cells.iter().map(|r| r[col].len()).max().unwrap_or(0))
        .collect();

    cells.iter().fold(String::new(), |mut output, row| {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(output, "{}", line.trim_end());
        output
    })
}

/// Every layer of `board` (or just `layer`) under a heading with its name.
pub fn board_keymap(board: &Board, layer: Option<u8>) -> String {
    let keymap = board.keymap;
    let mut output = String::new();
    for l in 0..keymap.layer_count() as u8 {
        if layer.is_some_and(|n| n != l) {
            continue;
        }
        if !output.is_empty() {
            output.push('\n');
        }
        let name = board.layer_names.get(l as usize).copied().unwrap_or("");
        let _ = writeln!(output, "layer {l} ({name}):");
        output.push_str(&layer_table(keymap, l));
    }
    output
}

/// A short description of a board's keymap.
pub fn summary(board: &Board) -> String {
    let keymap = board.keymap;
    format!(
        "{}: {} layers of {}x{}, {} tap dances, protocol: {}",
        board.name,
        keymap.layer_count(),
        keymap.rows(),
        keymap.cols(),
        keymap.tap_dances().len(),
        match board.protocol {
            Some(variant) => format!("{variant:?}").to_lowercase(),
            None => "none".to_owned(),
        }
    )
}

#[cfg(test)]
#[path = "keymap_table_test.rs"]
mod test;
