//! URL ⇄ screen mapping of the SPA.

use serde::{Deserialize, Serialize};

pub const HOME_PATH: &str = "/inicio";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PATH: &str = "/administrar";
const LEGACY_ADMIN_PATH: &str = "/admin";

/// The six back-office screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminScreen {
    Tags,
    Brands,
    Suppliers,
    Units,
    Categories,
    Banners,
}

impl AdminScreen {
    pub const ALL: [AdminScreen; 6] = [
        AdminScreen::Banners,
        AdminScreen::Categories,
        AdminScreen::Brands,
        AdminScreen::Suppliers,
        AdminScreen::Units,
        AdminScreen::Tags,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            AdminScreen::Tags => "etiquetas",
            AdminScreen::Brands => "marcas",
            AdminScreen::Suppliers => "proveedores",
            AdminScreen::Units => "unidades",
            AdminScreen::Categories => "categorias",
            AdminScreen::Banners => "promociones",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Old `/admin/*` segment
    fn from_legacy_slug(slug: &str) -> Option<Self> {
        match slug {
            "banners" => Some(AdminScreen::Banners),
            other => Self::from_slug(other),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdminScreen::Tags => "Etiquetas",
            AdminScreen::Brands => "Marcas",
            AdminScreen::Suppliers => "Proveedores",
            AdminScreen::Units => "Unidades",
            AdminScreen::Categories => "Categorías",
            AdminScreen::Banners => "Promociones",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AdminScreen::Tags => "Etiquetas para clasificar productos",
            AdminScreen::Brands => "Marcas de los productos",
            AdminScreen::Suppliers => "Datos de contacto de proveedores",
            AdminScreen::Units => "Unidades de medida",
            AdminScreen::Categories => "Categorías de la tienda",
            AdminScreen::Banners => "Banners del carrusel de inicio",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AdminScreen::Tags => "tags",
            AdminScreen::Brands => "brands",
            AdminScreen::Suppliers => "suppliers",
            AdminScreen::Units => "units",
            AdminScreen::Categories => "categories",
            AdminScreen::Banners => "banners",
        }
    }

    pub fn new_label(&self) -> &'static str {
        match self {
            AdminScreen::Tags => "Nueva etiqueta",
            AdminScreen::Brands => "Nueva marca",
            AdminScreen::Suppliers => "Nuevo proveedor",
            AdminScreen::Units => "Nueva unidad",
            AdminScreen::Categories => "Nueva categoría",
            AdminScreen::Banners => "Nueva promoción",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login { next: Option<String> },
    AdminPanel,
    Admin(AdminScreen),
    NotFound(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LoginQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next: Option<String>,
}

/// Only same-origin absolute paths are followed after login
fn safe_next(next: Option<String>) -> Option<String> {
    next.filter(|n| n.starts_with('/') && !n.starts_with("//"))
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

impl AppRoute {
    pub fn from_location(path: &str, search: &str) -> Self {
        match normalize(path) {
            "/" | HOME_PATH => AppRoute::Home,
            LOGIN_PATH => {
                let query: LoginQuery =
                    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
                AppRoute::Login {
                    next: safe_next(query.next),
                }
            }
            ADMIN_PATH => AppRoute::AdminPanel,
            other => match other.strip_prefix(ADMIN_PATH).and_then(|r| r.strip_prefix('/')) {
                // unknown back-office pages fall back to the panel
                Some(slug) => AdminScreen::from_slug(slug)
                    .map(AppRoute::Admin)
                    .unwrap_or(AppRoute::AdminPanel),
                None => AppRoute::NotFound(other.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => HOME_PATH.to_string(),
            AppRoute::Login { next } => {
                let query = LoginQuery { next: next.clone() };
                match serde_qs::to_string(&query) {
                    Ok(qs) if !qs.is_empty() => format!("{}?{}", LOGIN_PATH, qs),
                    _ => LOGIN_PATH.to_string(),
                }
            }
            AppRoute::AdminPanel => ADMIN_PATH.to_string(),
            AppRoute::Admin(screen) => format!("{}/{}", ADMIN_PATH, screen.slug()),
            AppRoute::NotFound(path) => path.clone(),
        }
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, AppRoute::AdminPanel | AppRoute::Admin(_))
    }
}

/// Canonical URL for aliases and the old `/admin/*` paths, `None` when the
/// path is already canonical.
pub fn redirect_for(path: &str) -> Option<String> {
    let path = normalize(path);
    if path == "/" {
        return Some(HOME_PATH.to_string());
    }
    if path == LEGACY_ADMIN_PATH {
        return Some(ADMIN_PATH.to_string());
    }
    let slug = path
        .strip_prefix(LEGACY_ADMIN_PATH)
        .and_then(|rest| rest.strip_prefix('/'))?;
    Some(match AdminScreen::from_legacy_slug(slug) {
        Some(screen) => AppRoute::Admin(screen).path(),
        None => ADMIN_PATH.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_location() {
        assert_eq!(AppRoute::from_location("/", ""), AppRoute::Home);
        assert_eq!(AppRoute::from_location("/inicio", ""), AppRoute::Home);
        assert_eq!(AppRoute::from_location("/administrar/", ""), AppRoute::AdminPanel);
        assert_eq!(
            AppRoute::from_location("/administrar/promociones", ""),
            AppRoute::Admin(AdminScreen::Banners)
        );
        assert_eq!(
            AppRoute::from_location("/administrar/pedidos", ""),
            AppRoute::AdminPanel
        );
        assert_eq!(
            AppRoute::from_location("/tienda", ""),
            AppRoute::NotFound("/tienda".into())
        );
    }

    #[test]
    fn test_every_screen_path_parses_back() {
        for screen in AdminScreen::ALL {
            let route = AppRoute::Admin(screen);
            assert_eq!(AppRoute::from_location(&route.path(), ""), route);
        }
    }

    #[test]
    fn test_login_next() {
        let route = AppRoute::Login {
            next: Some("/administrar/marcas".into()),
        };
        let path = route.path();
        let (p, q) = path.split_once('?').unwrap();
        assert_eq!(AppRoute::from_location(p, q), route);

        assert_eq!(
            AppRoute::Login { next: None }.path(),
            LOGIN_PATH
        );
        assert_eq!(
            AppRoute::from_location("/login", "?next=%2Fadministrar"),
            AppRoute::Login {
                next: Some("/administrar".into())
            }
        );
        // off-site targets are dropped
        assert_eq!(
            AppRoute::from_location("/login", "?next=https://evil.example"),
            AppRoute::Login { next: None }
        );
    }

    #[test]
    fn test_legacy_admin_paths_redirect() {
        assert_eq!(redirect_for("/admin").as_deref(), Some("/administrar"));
        assert_eq!(
            redirect_for("/admin/banners").as_deref(),
            Some("/administrar/promociones")
        );
        assert_eq!(
            redirect_for("/admin/marcas/").as_deref(),
            Some("/administrar/marcas")
        );
        assert_eq!(
            redirect_for("/admin/productos").as_deref(),
            Some("/administrar")
        );
        assert_eq!(redirect_for("/").as_deref(), Some("/inicio"));
        assert_eq!(redirect_for("/administrar/marcas"), None);
        assert_eq!(redirect_for("/administracion"), None);
    }

    #[test]
    fn test_admin_routes_are_guarded() {
        assert!(AppRoute::AdminPanel.requires_admin());
        assert!(AppRoute::Admin(AdminScreen::Units).requires_admin());
        assert!(!AppRoute::Home.requires_admin());
        assert!(!AppRoute::Login { next: None }.requires_admin());
    }
}
