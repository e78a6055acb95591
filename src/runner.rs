//! The verification pass itself: one browser session, one page, the fixed
//! check sequence, one screenshot.

use std::io::Write;

use playwright::api::{BrowserContext, DocumentLoadState, Page};
use playwright::Playwright;

use crate::checks::{outcome_line, PresenceCheck, SectionProbe, VerifyPlan};
use crate::config::VerifyConfig;
use crate::Error;

/// Outcome counts for a completed pass. Feeds diagnostics only; failed
/// checks are reported through report lines, never the exit status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub found: usize,
    pub missing: usize,
}

impl RunSummary {
    fn record(&mut self, found: bool) {
        if found {
            self.found += 1;
        } else {
            self.missing += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.found + self.missing
    }
}

/// Runs the full pass, writing one report line per check to `out`.
///
/// The browser session is torn down on every exit path; an error from the
/// check sequence is surfaced only after the context and browser have been
/// closed.
pub async fn run(
    config: &VerifyConfig,
    plan: &VerifyPlan,
    out: &mut dyn Write,
) -> Result<RunSummary, Error> {
    let playwright = Playwright::initialize().await?;
    playwright.prepare()?; // install browsers
    let chromium = playwright.chromium();
    let browser = chromium.launcher().headless(config.headless).launch().await?;
    let context = browser.context_builder().build().await?;

    let outcome = verify_page(&context, config, plan, out).await;

    context.close().await.ok();
    browser.close().await.ok();
    outcome
}

async fn verify_page(
    context: &BrowserContext,
    config: &VerifyConfig,
    plan: &VerifyPlan,
    out: &mut dyn Write,
) -> Result<RunSummary, Error> {
    let page = context.new_page().await?;
    log::info!("navigating to {}", config.base_url);
    page.goto_builder(&config.base_url)
        .wait_until(DocumentLoadState::NetworkIdle)
        .goto()
        .await?;

    let mut summary = RunSummary::default();
    for check in &plan.top_level {
        let found = is_present(&page, check).await?;
        writeln!(out, "{}", outcome_line(check.label, found))?;
        summary.record(found);
    }

    probe_section(&page, &plan.stress_test, out, &mut summary).await?;

    log::info!("writing screenshot to {}", config.screenshot_path.display());
    page.screenshot_builder()
        .full_page(true)
        .path(config.screenshot_path.clone())
        .screenshot()
        .await?;

    Ok(summary)
}

/// True when at least one rendered element matches the check.
async fn is_present(page: &Page, check: &PresenceCheck) -> Result<bool, Error> {
    let matches = page.query_selector_all(&check.selector()).await?;
    log::debug!("{} matched {} elements", check.label, matches.len());
    Ok(!matches.is_empty())
}

/// Reports the anchor check; when present, scrolls it into view and reports
/// each nested check that is found. Nested checks that are missing are
/// counted but produce no line.
async fn probe_section(
    page: &Page,
    section: &SectionProbe,
    out: &mut dyn Write,
    summary: &mut RunSummary,
) -> Result<(), Error> {
    let anchors = page.query_selector_all(&section.anchor.selector()).await?;
    writeln!(out, "{}", outcome_line(section.anchor.label, !anchors.is_empty()))?;
    summary.record(!anchors.is_empty());

    let anchor = match anchors.first() {
        Some(anchor) => anchor,
        None => return Ok(()),
    };
    anchor.scroll_into_view_if_needed(None).await?;

    for check in &section.nested {
        let found = is_present(page, check).await?;
        if found {
            writeln!(out, "{}", outcome_line(check.label, true))?;
        }
        summary.record(found);
    }
    Ok(())
}
