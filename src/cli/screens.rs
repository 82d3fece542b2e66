//! Screens command handler.
//!
//! Lists the screens and the tab bar for a theme without starting the UI.

use crate::model::Screen;
use crate::tui::{TabBar, ThemeKind};
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenEntry {
    pub id: Screen,
    pub title: &'static str,
    /// Position in the tab bar, 1-based, if the screen has a tab
    pub tab: Option<usize>,
    pub requires_session: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub key: usize,
    pub target: Screen,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreensReport {
    pub theme: ThemeKind,
    pub screens: Vec<ScreenEntry>,
    pub tabs: Vec<TabEntry>,
}

/// Build the report for `theme`.
#[must_use]
pub fn screens_report(theme: ThemeKind) -> ScreensReport {
    let bar = TabBar::new(theme.tab_variant());
    let screens = Screen::ALL
        .iter()
        .map(|&screen| ScreenEntry {
            id: screen,
            title: screen.title(),
            tab: bar.active_index(screen).map(|i| i + 1),
            requires_session: !screen.is_pre_session(),
        })
        .collect();
    let tabs = bar
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| TabEntry {
            key: i + 1,
            target: item.target,
            label: item.label,
            badge: item.badge,
        })
        .collect();
    ScreensReport {
        theme,
        screens,
        tabs,
    }
}

/// Plain-text table of the report.
#[must_use]
pub fn format_screens_table(report: &ScreensReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Screens ({} theme)", report.theme);
    let _ = writeln!(out, "  {:<15} {:<22} {:<4} SESSION", "ID", "TITLE", "TAB");
    for entry in &report.screens {
        let tab = entry.tab.map_or_else(|| "-".to_string(), |t| t.to_string());
        let session = if entry.requires_session { "yes" } else { "no" };
        let _ = writeln!(out, "  {:<15} {:<22} {:<4} {session}", entry.id.id(), entry.title, tab);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Tab bar");
    for tab in &report.tabs {
        let badge = tab.badge.map(|b| format!(" ({b})")).unwrap_or_default();
        let _ = writeln!(out, "  [{}] {:<10} -> {}{badge}", tab.key, tab.label, tab.target);
    }
    out
}

/// Run the screens command
pub fn run_screens(theme: ThemeKind, json: bool) -> Result<()> {
    let report = screens_report(theme);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_screens_table(&report));
    }
    Ok(())
}
