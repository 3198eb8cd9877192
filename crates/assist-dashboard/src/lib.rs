mod bootstrap;
mod dashboard;
mod markup;
mod page;
mod panel;
mod render;
mod state;
mod view;

pub use bootstrap::{discover_widgets, initialize_widgets, Widget, WidgetKind};
pub use dashboard::{Control, Dashboard, RefreshSummary};
pub use markup::{escape, Markup};
pub use page::{
    render_page, ACCOUNTS_CONTAINER_ID, CONFIG_CONTAINER_ID, EMAILS_CONTAINER_ID,
    EMAILS_HEADING_ID, REFRESH_BUTTON_ID, TOGGLE_BUTTON_ID,
};
pub use panel::{load_accounts, load_config, load_emails, Panel, PanelOutcome, PanelUpdate};
pub use render::{render_accounts, render_config, render_emails, render_error, render_loading};
pub use state::DashboardState;
pub use view::{PageView, View};
