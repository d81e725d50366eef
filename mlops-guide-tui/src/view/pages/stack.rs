//! 技术栈图页面
//!
//! 连线画在 Braille 画布上，节点方框叠在连线上面。
//! 图的坐标 y 向下，画布 y 向上，画线时翻转。

use mlops_guide_core::content::stack::TITLE;
use mlops_guide_core::diagram::{Bounds, ConnectorRenderer, NodeKind, Point};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::i18n::t;
use crate::model::{App, HitTarget};
use crate::util::text::truncate;
use crate::view::theme::{colors, Styles};

/// 把连线交给 ratatui 画布
struct CanvasConnectors<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
    color: Color,
}

impl ConnectorRenderer for CanvasConnectors<'_, '_> {
    fn draw_connector(&mut self, from: Point, to: Point) {
        self.ctx.draw(&CanvasLine::new(
            from.x,
            self.height - from.y,
            to.x,
            self.height - to.y,
            self.color,
        ));
    }
}

/// 渲染技术栈图页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().pages;
    let c = colors();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let header = vec![
        Line::styled(TITLE, Styles::heading()),
        Line::from(vec![
            Span::styled(format!("{}   ", texts.stack_hint), Styles::muted()),
            Span::styled("╭─╮ ", Styles::border(false)),
            Span::styled(texts.legend_process, Styles::body()),
            Span::raw("   "),
            Span::styled("╔═╗ ", Style::default().fg(c.storage)),
            Span::styled(texts.legend_storage, Styles::body()),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    let diagram_area = layout[1];
    if diagram_area.width == 0 || diagram_area.height == 0 {
        return;
    }
    let diagram = &app.content.stack.diagram;
    let width = f64::from(diagram_area.width);
    let height = f64::from(diagram_area.height);

    // 连线
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            let mut renderer = CanvasConnectors {
                ctx,
                height,
                color: c.border,
            };
            diagram.render_connectors(width, height, &mut renderer);
        });
    frame.render_widget(canvas, diagram_area);

    // 节点
    let cursor = app.stack.cursor();
    let focused = app.focus.is_content();
    let mut hits = app.hit_map.borrow_mut();

    for (index, placed) in diagram.place(width, height).iter().enumerate() {
        let rect = to_rect(placed.bounds, diagram_area);
        if rect.width < 3 || rect.height < 3 {
            continue;
        }
        let selected = focused && index == cursor;

        let (border_type, border_style) = match placed.node.kind {
            NodeKind::Storage => (BorderType::Double, Style::default().fg(c.storage)),
            NodeKind::Process => (BorderType::Rounded, Styles::border(selected)),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected { BorderType::Thick } else { border_type })
            .border_style(border_style);

        let label = truncate(placed.node.key.as_str(), usize::from(rect.width - 2));
        let label_style = if selected {
            Styles::selected()
        } else {
            Styles::body()
        };
        let inner = block.inner(rect);
        let text_row = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1) / 2, inner.width, 1);

        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);
        frame.render_widget(
            Paragraph::new(Line::styled(label, label_style)).alignment(Alignment::Center),
            text_row,
        );
        hits.push(rect, HitTarget::Tile(index));
    }
}

/// 图坐标 → 终端单元格
fn to_rect(bounds: Bounds, area: Rect) -> Rect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cell = |v: f64| v.round().clamp(0.0, f64::from(u16::MAX)) as u16;

    let height = cell(bounds.height).max(3);
    Rect::new(
        area.x.saturating_add(cell(bounds.x)),
        area.y.saturating_add(cell(bounds.y)),
        cell(bounds.width),
        height,
    )
    .intersection(area)
}
