// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod app;
mod theme;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use netpanel_common_i18n::{resolve_locale, DEFAULT_LOCALE};
use netpanel_crons_core::validate_timezone;

use app::{App, Config};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Cron schedule editor for NetPanel.
#[derive(Debug, Parser)]
#[command(name = "netpanel-tui", version)]
struct Args {
	/// UI locale (en, es, ar, zh-CN)
	#[arg(long, env = "NETPANEL_LOCALE", default_value = "en")]
	locale: String,

	/// Color theme (dark or light)
	#[arg(long, env = "NETPANEL_THEME", default_value = "dark")]
	theme: String,

	/// IANA timezone for the next-run preview
	#[arg(long, env = "NETPANEL_TIMEZONE", default_value = "UTC")]
	timezone: String,

	/// Initial cron expression
	#[arg(long, default_value = "0 * * * * *")]
	expression: String,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt::init();

	let args = Args::parse();

	let locale = resolve_locale(Some(&args.locale), DEFAULT_LOCALE);
	let timezone = match validate_timezone(&args.timezone) {
		Ok(()) => args.timezone.clone(),
		Err(e) => {
			tracing::warn!(timezone = %args.timezone, error = %e, "falling back to UTC");
			"UTC".to_string()
		}
	};

	let config = Config {
		locale: locale.to_string(),
		theme: args.theme.clone(),
		timezone,
		expression: args.expression.clone(),
	};

	run(App::new(&config))
}

fn run(mut app: App) -> Result<()> {
	enable_raw_mode()?;
	io::stdout().execute(EnterAlternateScreen)?;

	let backend = CrosstermBackend::new(io::stdout());
	let mut terminal = Terminal::new(backend)?;

	let result = (|| -> Result<()> {
		loop {
			terminal.draw(|frame| app.render(frame))?;

			if event::poll(TICK_RATE)? {
				if let Event::Key(key) = event::read()? {
					if key.kind == KeyEventKind::Press {
						app.handle_key_event(key);
					}
				}
			}

			if app.should_quit() {
				break;
			}
		}
		Ok(())
	})();

	disable_raw_mode()?;
	io::stdout().execute(LeaveAlternateScreen)?;

	result
}
