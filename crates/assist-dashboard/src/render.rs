//! Pure panel renderers: fetched records in, [`Markup`] out.

use crate::markup::{escape, Markup};
use crate::panel::Panel;
use assist_core::{
    category_class, category_icon, format_date, format_importance, importance_class, Account,
    Config, EmailSummary,
};
use std::fmt::Write;

pub const NO_CONFIG: &str = "No configuration available";
pub const NO_ACCOUNTS: &str = "No accounts configured";
pub const NO_EMAILS: &str = "No emails found";

pub fn render_loading() -> Markup {
    Markup::trusted(
        r#"<div class="text-center text-muted py-3"><div class="spinner-border spinner-border-sm me-2" role="status"></div>Loading...</div>"#,
    )
}

/// Inline error block shown in place of a panel's content.
pub fn render_error(panel: Panel, message: &str) -> Markup {
    Markup::trusted(format!(
        r#"<div class="alert alert-danger mb-0" role="alert"><i class="fas fa-exclamation-circle me-2"></i>Error loading {}: {}</div>"#,
        panel.noun(),
        escape(message)
    ))
}

fn render_placeholder(text: &str) -> Markup {
    Markup::trusted(format!(
        r#"<p class="text-muted text-center my-3">{text}</p>"#
    ))
}

fn text_or_dash(value: Option<&str>) -> Markup {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(value) => escape(value),
        None => Markup::trusted("&mdash;"),
    }
}

pub fn render_config(config: &Config) -> Markup {
    if config.is_empty() {
        return render_placeholder(NO_CONFIG);
    }

    let interval = config
        .email_check_interval
        .map(|secs| format!("{secs} seconds"));
    let threshold = config
        .importance_threshold
        .map(|value| format!("{value:.2} ({})", format_importance(value)));

    let fields = [
        ("App Name", config.app_name.as_deref()),
        ("Version", config.version.as_deref()),
        ("Log Level", config.log_level.as_deref()),
        ("Check Interval", interval.as_deref()),
        ("Importance Threshold", threshold.as_deref()),
    ];

    let mut html = String::from(r#"<dl class="row mb-0">"#);
    for (label, value) in fields {
        let _ = write!(
            html,
            r#"<dt class="col-sm-5">{label}</dt><dd class="col-sm-7">{}</dd>"#,
            text_or_dash(value)
        );
    }
    html.push_str("</dl>");
    Markup::trusted(html)
}

pub fn render_accounts(accounts: &[Account]) -> Markup {
    if accounts.is_empty() {
        return render_placeholder(NO_ACCOUNTS);
    }

    let mut html = String::from(r#"<ul class="list-group list-group-flush">"#);
    for account in accounts {
        let _ = write!(
            html,
            r#"<li class="list-group-item"><div><i class="fas fa-envelope me-2"></i><strong>{}</strong></div><div class="small text-muted"><i class="fas fa-server me-1"></i>{}</div>"#,
            text_or_dash(Some(account.email_address.as_str())),
            text_or_dash(Some(account.imap_server.as_str())),
        );
        if account.last_checked.is_some() {
            let _ = write!(
                html,
                r#"<div class="small text-muted">Last checked: {}</div>"#,
                escape(&format_date(account.last_checked.as_deref()))
            );
        }
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    Markup::trusted(html)
}

pub fn render_emails(emails: &[EmailSummary]) -> Markup {
    if emails.is_empty() {
        return render_placeholder(NO_EMAILS);
    }

    let mut html = String::from(r#"<div class="email-list">"#);
    for email in emails {
        html.push_str(render_email_card(email).as_str());
    }
    html.push_str("</div>");
    Markup::trusted(html)
}

fn render_email_card(email: &EmailSummary) -> Markup {
    let category = email
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or("other");
    let score = email.importance_score();
    let subject = email
        .subject
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("(no subject)");

    let mut html = format!(
        r#"<div class="card email-card mb-3 border-start border-4 {border}"><div class="card-body"><div class="d-flex justify-content-between align-items-start"><h5 class="card-title mb-1">{subject}</h5><span class="badge {badge}"><i class="fas {icon} me-1"></i>{category}</span></div><h6 class="card-subtitle mb-2 text-muted">From: {from}</h6>"#,
        border = importance_class(score),
        subject = escape(subject),
        badge = category_class(category),
        icon = category_icon(category),
        category = escape(category),
        from = text_or_dash(email.sender.as_deref()),
    );

    if let Some(summary) = email.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        let _ = write!(html, r#"<p class="card-text">{}</p>"#, escape(summary));
    }

    let _ = write!(
        html,
        r#"<div class="d-flex flex-wrap justify-content-between small text-muted"><span>Importance: <strong>{label}</strong> ({percent}%)</span><span>Action: {action}</span><span><i class="far fa-clock me-1"></i>{date}</span></div>"#,
        label = format_importance(score),
        percent = (score.clamp(0.0, 1.0) * 100.0).round() as u32,
        action = text_or_dash(email.action.as_deref()),
        date = escape(&format_date(email.date.as_deref())),
    );

    if email.processed == Some(true) {
        html.push_str(r#"<span class="badge bg-light text-dark mt-2">Processed</span>"#);
    }

    html.push_str("</div></div>");
    Markup::trusted(html)
}
