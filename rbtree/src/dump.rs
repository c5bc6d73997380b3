use std::io;

use crate::tree::RbTree;

impl<T> RbTree<'_, T> {
    /// Draws the tree level by level, one line per depth.
    ///
    /// Every node gets a cell `label_width` characters wide in the column of
    /// its in-order position, so parents sit between their subtrees. Labels
    /// are cut or padded to fit, and the last character of a red node's cell
    /// is replaced by `*`.
    ///
    /// ```text
    ///    2
    /// 1 *   3 *
    /// ```
    pub fn dump<W, F>(&self, out: &mut W, label_width: usize, mut label: F) -> io::Result<()>
    where
        W: io::Write,
        F: FnMut(&T) -> String,
    {
        // (depth, in-order position, cell)
        let mut cells = Vec::with_capacity(self.len);
        let mut iter = self.iter();
        let mut pos = 0;
        while let Some((node, depth)) = iter.current() {
            let mut cell: Vec<char> = label(unsafe { node.data() })
                .chars()
                .chain(std::iter::repeat(' '))
                .take(label_width)
                .collect();
            if unsafe { node.is_red() } {
                if let Some(last) = cell.last_mut() {
                    *last = '*';
                }
            }
            cells.push((depth, pos, cell));
            pos += 1;
            iter.next();
        }
        cells.sort_by_key(|&(depth, pos, _)| (depth, pos));

        let blank = " ".repeat(label_width);
        let mut line = String::new();
        let mut cells = cells.into_iter().peekable();
        while let Some((depth, pos, cell)) = cells.next() {
            let column = line.chars().count() / label_width.max(1);
            for _ in column..pos {
                line.push_str(&blank);
            }
            line.extend(cell);

            if cells.peek().map_or(true, |next| next.0 != depth) {
                writeln!(out, "{}", line.trim_end())?;
                line.clear();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T>(tree: &RbTree<'_, T>, width: usize, label: impl FnMut(&T) -> String) -> String {
        let mut out = Vec::new();
        tree.dump(&mut out, width, label).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty() {
        let tree: RbTree<'_, i32> = RbTree::new();
        assert_eq!(render(&tree, 3, |v| v.to_string()), "");
    }

    #[test]
    fn marks_red_nodes() {
        let mut tree = RbTree::new();
        for i in [2, 1, 3] {
            tree.insert(i).unwrap();
        }
        assert_eq!(render(&tree, 3, |v| v.to_string()), "   2\n1 *   3 *\n");
    }

    #[test]
    fn labels_are_cut_to_width() {
        let mut tree = RbTree::new();
        for i in [200, 100, 300] {
            tree.insert(i).unwrap();
        }
        assert_eq!(render(&tree, 2, |v| v.to_string()), "  20\n1*  3*\n");
    }

    #[test]
    fn columns_follow_inorder_position() {
        //        4
        //    2*      6*
        //  1   3   5   7
        //                8*
        let mut tree = RbTree::new();
        for i in 1..=8 {
            tree.insert(i).unwrap();
        }
        let dump = render(&tree, 2, |v| v.to_string());
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 4);
        for (i, line) in lines.iter().enumerate() {
            for cell in line.as_bytes().chunks(2) {
                let cell = std::str::from_utf8(cell).unwrap().trim_end_matches([' ', '*']);
                if cell.is_empty() {
                    continue;
                }
                let key: usize = cell.parse().unwrap();
                let column = line.find(cell).unwrap() / 2;
                assert_eq!(column, key - 1, "key {key} on level {i}");
            }
        }
        assert_eq!(lines[0].trim(), "4");
    }
}
