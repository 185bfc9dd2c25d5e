use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub auth: AuthEndpoints,
    pub artwork: ArtworkEndpoints,
    pub artist: ArtistEndpoints,
    pub customer: CustomerEndpoints,
    pub payments: PaymentEndpoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthEndpoints {
    pub login: &'static str,
    pub signup: &'static str,
    pub me: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkEndpoints {
    pub base: &'static str,
    pub list: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistEndpoints {
    pub dashboard: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerEndpoints {
    pub dashboard: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEndpoints {
    pub create_order: &'static str,
    pub verify: &'static str,
}

impl Endpoints {
    pub const fn new() -> Self {
        Self {
            auth: AuthEndpoints {
                login: "/api/auth/login",
                signup: "/api/auth/signup",
                me: "/api/auth/me",
            },
            artwork: ArtworkEndpoints {
                base: "/api/artworks",
                list: "/api/artworks/list",
                create: "/api/artworks/create",
                update: "/api/artworks/update",
                delete: "/api/artworks/delete",
            },
            artist: ArtistEndpoints {
                dashboard: "/api/artist/dashboard",
            },
            customer: CustomerEndpoints {
                dashboard: "/api/customer/dashboard",
            },
            payments: PaymentEndpoints {
                create_order: "/api/payments/create-order",
                verify: "/api/payments/verify",
            },
        }
    }

    pub fn paths(&self) -> [&'static str; 12] {
        [
            self.auth.login,
            self.auth.signup,
            self.auth.me,
            self.artwork.base,
            self.artwork.list,
            self.artwork.create,
            self.artwork.update,
            self.artwork.delete,
            self.artist.dashboard,
            self.customer.dashboard,
            self.payments.create_order,
            self.payments.verify,
        ]
    }
}
