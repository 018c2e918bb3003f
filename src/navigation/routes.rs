use std::fmt;

/// Admin pages behind the session guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminPage {
    Dashboard,
    Products,
    Enquiries,
    HomePage,
    About,
    Activities,
    Gallery,
    ChatbotTrainer,
    Settings,
    /// Any other `/admin/*` path. Still protected.
    Other(String),
}

impl AdminPage {
    fn from_segment(segment: &str) -> Self {
        match segment {
            "" | "dashboard" => Self::Dashboard,
            "products" => Self::Products,
            "enquiries" => Self::Enquiries,
            "home-page" => Self::HomePage,
            "about" => Self::About,
            "activities" => Self::Activities,
            "gallery" => Self::Gallery,
            "chatbot-trainer" => Self::ChatbotTrainer,
            "settings" => Self::Settings,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Enquiries => "Enquiries",
            Self::HomePage => "Home Page",
            Self::About => "About Page",
            Self::Activities => "Activity Page",
            Self::Gallery => "Gallery Manager",
            Self::ChatbotTrainer => "Chatbot Trainer",
            Self::Settings => "Settings",
            Self::Other(segment) => segment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    ProductDetail { id: String },
    About,
    Contact,
    Activity,
    Chatbot,
    AdminLogin,
    Admin(AdminPage),
    NotFound(String),
}

impl Route {
    /// Whether rendering this route requires a confirmed admin session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Admin(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("Home"),
            Self::Products => f.write_str("Products"),
            Self::ProductDetail { id } => write!(f, "Product {id}"),
            Self::About => f.write_str("About"),
            Self::Contact => f.write_str("Contact"),
            Self::Activity => f.write_str("Activity"),
            Self::Chatbot => f.write_str("Chatbot"),
            Self::AdminLogin => f.write_str("Admin Login"),
            Self::Admin(page) => write!(f, "Admin / {}", page.title()),
            Self::NotFound(path) => write!(f, "Not Found ({path})"),
        }
    }
}

/// Maps paths to [`Route`]s. The login path is configurable, everything
/// else is fixed by the site.
#[derive(Debug, Clone)]
pub struct RouteTable {
    login_path: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new("/admin/login")
    }
}

impl RouteTable {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: normalize(&login_path.into()),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn resolve(&self, path: &str) -> Route {
        let path = normalize(path);
        if path == self.login_path {
            return Route::AdminLogin;
        }

        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] => Route::Home,
            ["products"] => Route::Products,
            ["products", id] if !id.is_empty() => Route::ProductDetail {
                id: (*id).to_string(),
            },
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["activity"] => Route::Activity,
            ["chatbot"] => Route::Chatbot,
            ["admin"] => Route::Admin(AdminPage::Dashboard),
            ["admin", rest @ ..] => Route::Admin(AdminPage::from_segment(&rest.join("/"))),
            _ => Route::NotFound(path),
        }
    }
}

/// Drop query/fragment and any trailing slash; `/` stays `/`.
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
