//! 工具页面

use mlops_guide_core::content::tools::{TITLE, TOOLS_IMAGE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::image;
use crate::view::components::tile_grid::{self, GridSpec, TileView};
use crate::view::theme::Styles;

const GRID: GridSpec = GridSpec {
    min_width: 30,
    max_columns: 3,
    tile_height: 9,
};

/// 渲染工具页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let header = vec![
        Line::styled(TITLE, Styles::heading()),
        image::caption(&TOOLS_IMAGE, &app.assets_dir),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    let tiles = app.content.tools.tiles();
    let views: Vec<TileView> = tiles
        .iter()
        .map(|tile| TileView::from_tile(tile).with_footer(t().pages.learn_more))
        .collect();
    tile_grid::render(app, frame, layout[1], &views, app.tools.cursor(), GRID);
}
