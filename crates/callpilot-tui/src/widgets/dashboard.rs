//! Dashboard section: headline cards and the two overview charts

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Tabs, Widget},
};

use callpilot_app::TimeRange;
use callpilot_core::{CallVolumePoint, DashboardData, EfficiencyPoint, Trend};

use super::bars::{render_bar, to_half_blocks};
use super::text::{format_money, group_thousands, truncate};
use crate::theme::{styles, Palette};

/// The average-duration card's bar is full at ten minutes
const AVG_DURATION_SCALE_SECS: f64 = 600.0;

/// Below this content height the charts are dropped
const MIN_CHART_HEIGHT: u16 = 8;

pub struct Dashboard<'a> {
    data: &'a DashboardData,
    time_range: TimeRange,
    palette: &'a Palette,
}

impl<'a> Dashboard<'a> {
    pub fn new(data: &'a DashboardData, time_range: TimeRange, palette: &'a Palette) -> Self {
        Self {
            data,
            time_range,
            palette,
        }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title, cards, charts] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_title(title, buf);
        self.render_cards(cards, buf);

        if charts.height >= MIN_CHART_HEIGHT {
            let [volume, efficiency] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(charts);
            VolumeChart::new(self.data, self.palette).render(volume, buf);
            EfficiencyChart::new(
                &self.data.efficiency,
                self.data.average_efficiency(),
                self.palette,
            )
            .render(efficiency, buf);
        }
    }
}

impl Dashboard<'_> {
    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Paragraph::new(vec![
            Line::from(Span::styled(" Dashboard", styles::title(p))),
            Line::from(Span::styled(
                " Asosiy boshqaruv paneli - umumiy statistika",
                styles::text_secondary(p),
            )),
        ])
        .render(area, buf);

        let titles: Vec<Line> = TimeRange::ALL
            .iter()
            .map(|r| Line::from(r.label()))
            .collect();
        let selected = TimeRange::ALL
            .iter()
            .position(|r| *r == self.time_range)
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(styles::text_secondary(p))
            .highlight_style(styles::focused_selected(p))
            .divider("│");

        let width = 32.min(area.width);
        let tabs_area = Rect::new(area.right() - width, area.y, width, 1);
        tabs.render(tabs_area, buf);
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let stats = &self.data.stats;
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        let total = &stats.total_calls;
        StatCard::new("Umumiy Qo'ng'iroqlar", group_thousands(total.total().into()), p)
            .trend(total.trend, total.change)
            .detail(Line::from(vec![
                Span::styled("● ", Style::default().fg(p.incoming)),
                Span::styled(format!("Kiruvchi {}  ", total.incoming), styles::text_secondary(p)),
                Span::styled("● ", Style::default().fg(p.outgoing)),
                Span::styled(format!("Chiquvchi {}", total.outgoing), styles::text_secondary(p)),
            ]))
            .render(columns[0], buf);

        let avg = &stats.avg_duration;
        let ratio =
            (f64::from(avg.value.total_seconds()) / AVG_DURATION_SCALE_SECS).clamp(0.0, 1.0);
        StatCard::new("O'rtacha Davomiyligi", avg.value.to_string(), p)
            .trend(avg.trend, avg.change)
            .gauge(ratio)
            .render(columns[1], buf);

        let balance = &stats.balance;
        StatCard::new("Sarflangan Mablag'", format_money(balance.spent), p)
            .trend(balance.trend, balance.change)
            .detail(Line::from(Span::styled(
                format!("Qolgan: {}", format_money(balance.remaining)),
                styles::text_secondary(p),
            )))
            .render(columns[2], buf);

        let ai = &stats.ai_efficiency;
        StatCard::new("AI Samaradorligi", format!("{}%", ai.rate), p)
            .trend(ai.trend, ai.change)
            .detail(Line::from(Span::styled(
                format!("{}/{} muvaffaqiyatli", ai.successful, ai.total),
                styles::text_secondary(p),
            )))
            .render(columns[3], buf);
    }
}

/// One headline statistic
struct StatCard<'a> {
    label: &'a str,
    value: String,
    trend: Option<(Trend, f64)>,
    detail: Option<Line<'a>>,
    gauge: Option<f64>,
    palette: &'a Palette,
}

impl<'a> StatCard<'a> {
    fn new(label: &'a str, value: String, palette: &'a Palette) -> Self {
        Self {
            label,
            value,
            trend: None,
            detail: None,
            gauge: None,
            palette,
        }
    }

    fn trend(mut self, trend: Trend, change: f64) -> Self {
        self.trend = Some((trend, change));
        self
    }

    fn detail(mut self, line: Line<'a>) -> Self {
        self.detail = Some(line);
        self
    }

    fn gauge(mut self, ratio: f64) -> Self {
        self.gauge = Some(ratio);
        self
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 2 || inner.width < 4 {
            return;
        }

        let label = Line::from(Span::styled(
            truncate(self.label, inner.width as usize),
            styles::text_secondary(p),
        ));
        buf.set_line(inner.x, inner.y, &label, inner.width);

        let mut value = vec![Span::styled(self.value, styles::title(p))];
        if let Some((trend, change)) = self.trend {
            value.push(Span::raw("  "));
            value.push(Span::styled(
                format!("{} {}%", trend.arrow(), change.abs()),
                styles::trend_style(p, trend),
            ));
        }
        buf.set_line(inner.x, inner.y + 1, &Line::from(value), inner.width);

        if inner.height < 3 {
            return;
        }
        let bottom = Rect::new(inner.x, inner.y + 2, inner.width, 1);
        if let Some(ratio) = self.gauge {
            Gauge::default()
                .ratio(ratio)
                .label("")
                .gauge_style(Style::default().fg(p.accent).bg(p.border_dim))
                .render(bottom, buf);
        } else if let Some(detail) = self.detail {
            buf.set_line(bottom.x, bottom.y, &detail, bottom.width);
        }
    }
}

/// Paired incoming/outgoing bars per time slot
pub struct VolumeChart<'a> {
    points: &'a [CallVolumePoint],
    peak: u32,
    palette: &'a Palette,
}

impl<'a> VolumeChart<'a> {
    pub fn new(data: &'a DashboardData, palette: &'a Palette) -> Self {
        Self {
            points: &data.call_volume,
            peak: data.peak_volume(),
            palette,
        }
    }
}

impl Widget for VolumeChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, "Qo'ng'iroqlar Statistikasi");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 4 || self.points.is_empty() {
            return;
        }

        let legend = Line::from(vec![
            Span::styled(" Kiruvchi va chiquvchi qo'ng'iroqlar   ", styles::text_muted(p)),
            Span::styled("■", Style::default().fg(p.incoming)),
            Span::styled(" Kiruvchi  ", styles::text_secondary(p)),
            Span::styled("■", Style::default().fg(p.outgoing)),
            Span::styled(" Chiquvchi", styles::text_secondary(p)),
        ]);
        buf.set_line(inner.x, inner.y, &legend, inner.width);

        let peak = self.peak;
        let chart = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 2);
        let label_y = inner.bottom() - 1;
        let slot = chart.width / self.points.len() as u16;
        if slot < 3 {
            return;
        }
        let bar_width = ((slot - 1) / 2).max(1);
        let bottom_y = chart.bottom() - 1;

        for (i, point) in self.points.iter().enumerate() {
            let x = chart.x + i as u16 * slot;
            let incoming = to_half_blocks(point.incoming.into(), peak.into(), chart.height);
            let outgoing = to_half_blocks(point.outgoing.into(), peak.into(), chart.height);
            render_bar(buf, x, bar_width, bottom_y, chart.y, incoming, p.incoming);
            render_bar(buf, x + bar_width, bar_width, bottom_y, chart.y, outgoing, p.outgoing);

            let label = truncate(&point.time, slot as usize - 1);
            buf.set_string(x, label_y, label, styles::text_muted(p));
        }
    }
}

/// Weekly AI efficiency bars with the mean in the title line
pub struct EfficiencyChart<'a> {
    points: &'a [EfficiencyPoint],
    average: f64,
    palette: &'a Palette,
}

impl<'a> EfficiencyChart<'a> {
    pub fn new(points: &'a [EfficiencyPoint], average: f64, palette: &'a Palette) -> Self {
        Self {
            points,
            average,
            palette,
        }
    }
}

impl Widget for EfficiencyChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, "AI Samaradorligi");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 4 || self.points.is_empty() {
            return;
        }

        let header = Line::from(vec![
            Span::styled(" Haftalik ko'rsatkich  ", styles::text_muted(p)),
            Span::styled(format!("O'rtacha: {:.1}%", self.average), styles::accent_bold(p)),
        ]);
        buf.set_line(inner.x, inner.y, &header, inner.width);

        let chart = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 2);
        let label_y = inner.bottom() - 1;
        let slot = chart.width / self.points.len() as u16;
        if slot < 2 {
            return;
        }
        let bar_width = (slot - 1).clamp(1, 3);
        let bottom_y = chart.bottom() - 1;

        for (i, point) in self.points.iter().enumerate() {
            let x = chart.x + i as u16 * slot;
            let height = to_half_blocks(point.rate.value().into(), 100.0, chart.height);
            render_bar(buf, x, bar_width, bottom_y, chart.y, height, p.accent);
            let label = truncate(&point.day, slot as usize - 1);
            buf.set_string(x, label_y, label, styles::text_muted(p));
        }
    }
}
