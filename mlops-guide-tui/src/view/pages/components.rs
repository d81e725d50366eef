//! 组件页面

use mlops_guide_core::content::components::{STACK_IMAGE, TITLE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::components::image;
use crate::view::components::tile_grid::{self, GridSpec, TileView};
use crate::view::theme::Styles;

const GRID: GridSpec = GridSpec {
    min_width: 26,
    max_columns: 4,
    tile_height: 6,
};

/// 渲染组件页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题 + 图片
            Constraint::Min(1),    // 磁贴
        ])
        .split(area);

    let header = vec![
        Line::styled(TITLE, Styles::heading()),
        image::caption(&STACK_IMAGE, &app.assets_dir),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    let tiles = app.content.components.tiles();
    let views: Vec<TileView> = tiles.iter().map(TileView::from_tile).collect();
    tile_grid::render(app, frame, layout[1], &views, app.components.cursor(), GRID);
}
