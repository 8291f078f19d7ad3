//! 鼠标命中区域
//!
//! View 层渲染表格时记录数据行所在的区域和滚动偏移，
//! Event 层据此把鼠标点击的坐标换算成当前页内的行索引。

use std::cell::Cell;

use ratatui::layout::{Position, Rect};

/// 表格数据行区域
#[derive(Debug, Default)]
pub struct TableHitArea {
    rows: Cell<Rect>,
    offset: Cell<usize>,
}

impl TableHitArea {
    /// 记录本帧的数据行区域和首个可见行的索引
    pub fn record(&self, rows: Rect, offset: usize) {
        self.rows.set(rows);
        self.offset.set(offset);
    }

    /// 页面切换后清除（没有表格时点击无效）
    pub fn reset(&self) {
        self.rows.set(Rect::default());
        self.offset.set(0);
    }

    /// 坐标对应的行索引（当前页内）
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.rows.get();
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        Some(self.offset.get() + usize::from(row - area.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_maps_to_row_index() {
        let hit = TableHitArea::default();
        hit.record(Rect::new(10, 5, 40, 8), 3);
        assert_eq!(hit.row_at(12, 5), Some(3));
        assert_eq!(hit.row_at(12, 9), Some(7));
        assert_eq!(hit.row_at(12, 13), None);
        assert_eq!(hit.row_at(2, 6), None);
    }

    #[test]
    fn reset_disables_hits() {
        let hit = TableHitArea::default();
        hit.record(Rect::new(0, 0, 10, 10), 0);
        hit.reset();
        assert_eq!(hit.row_at(1, 1), None);
    }
}
