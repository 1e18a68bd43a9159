//! Hard-coded sample data backing every view

use crate::domain::StatusLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRecord {
    /// Unique and stable; used as the sort tiebreak.
    pub id: &'static str,
    pub customer: &'static str,
    pub project: &'static str,
    pub address: &'static str,
    /// Display text only, never parsed.
    pub relative_date: &'static str,
    pub status: StatusLabel,
}

const fn order(
    id: &'static str,
    customer: &'static str,
    project: &'static str,
    address: &'static str,
    relative_date: &'static str,
    status: StatusLabel,
) -> OrderRecord {
    OrderRecord {
        id,
        customer,
        project,
        address,
        relative_date,
        status,
    }
}

pub static ORDERS: [OrderRecord; 9] = [
    order(
        "#CM9801",
        "Natali Craig",
        "Landing Page",
        "Meadow Lane Oakland",
        "Just now",
        StatusLabel::InProgress,
    ),
    order(
        "#CM9802",
        "Kate Morrison",
        "CRM Admin pages",
        "Larry San Francisco",
        "A minute ago",
        StatusLabel::Complete,
    ),
    order(
        "#CM9803",
        "Drew Cano",
        "Client Project",
        "Bagwell Avenue Ocala",
        "1 hour ago",
        StatusLabel::Pending,
    ),
    order(
        "#CM9804",
        "Orlando Diggs",
        "Admin Dashboard",
        "Washburn Baton Rouge",
        "Yesterday",
        StatusLabel::Rejected,
    ),
    order(
        "#CM9805",
        "Andi Lane",
        "App Landing Page",
        "Nest Lane Olivette",
        "Feb 2, 2023",
        StatusLabel::Rejected,
    ),
    order(
        "#CM9806",
        "Morgan Lane",
        "Web Application",
        "Washburn Baton Rouge",
        "Feb 1, 2023",
        StatusLabel::Approved,
    ),
    order(
        "#CM9807",
        "Parker Lane",
        "Web Application",
        "Washburn Baton Rouge",
        "Jan 31, 2023",
        StatusLabel::Approved,
    ),
    order(
        "#CM9808",
        "Parker Lane",
        "Web Application",
        "Washburn Baton Rouge",
        "Jan 31, 2023",
        StatusLabel::Approved,
    ),
    order(
        "#CM9809",
        "Parker Lane",
        "Web Application",
        "Washburn Baton Rouge",
        "Jan 31, 2023",
        StatusLabel::Approved,
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub name: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    /// Route path the card opens.
    pub link: &'static str,
}

impl SummaryCard {
    pub fn trending_up(&self) -> bool {
        !self.trend.starts_with('-')
    }
}

pub static SUMMARY_CARDS: [SummaryCard; 4] = [
    SummaryCard {
        name: "Customers",
        value: "3,781",
        trend: "+11.01%",
        link: "/",
    },
    SummaryCard {
        name: "Orders",
        value: "1,219",
        trend: "-0.03%",
        link: "/orders",
    },
    SummaryCard {
        name: "Revenue",
        value: "$695",
        trend: "+15.03%",
        link: "/",
    },
    SummaryCard {
        name: "Growth",
        value: "30.1%",
        trend: "+6.08%",
        link: "/",
    },
];

/// Monthly actuals against projections (millions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesPoint {
    pub month: &'static str,
    pub actual: u64,
    pub projection: u64,
}

const fn month(month: &'static str, actual: u64, projection: u64) -> SalesPoint {
    SalesPoint {
        month,
        actual,
        projection,
    }
}

pub static SALES: [SalesPoint; 6] = [
    month("Jan", 18, 22),
    month("Feb", 20, 25),
    month("Mar", 22, 23),
    month("Apr", 24, 27),
    month("May", 15, 20),
    month("Jun", 19, 23),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueTotal {
    pub title: &'static str,
    pub value: &'static str,
}

pub static REVENUE_TOTALS: [RevenueTotal; 2] = [
    RevenueTotal {
        title: "Current Week",
        value: "$58,211",
    },
    RevenueTotal {
        title: "Previous Week",
        value: "$68,768",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub price: &'static str,
    pub quantity: u32,
    pub amount: &'static str,
}

const fn product(
    name: &'static str,
    price: &'static str,
    quantity: u32,
    amount: &'static str,
) -> Product {
    Product {
        name,
        price,
        quantity,
        amount,
    }
}

pub static PRODUCTS: [Product; 19] = [
    product("ASOS Ridley High Waist", "$79.49", 82, "$6518.18"),
    product("Marco Lightweight Shirt", "$128.50", 37, "$4754.50"),
    product("Half Sleeve Shirt", "$39.99", 64, "$2559.36"),
    product("Lightweight Jacket", "$20.00", 184, "$3680.00"),
    product("Long Sleeve Shirt", "$25.50", 10, "$255.00"),
    product("Cotton T-Shirt", "$10.99", 184, "$2023.16"),
    product("Lightweight Jacket", "$20.00", 184, "$3680.00"),
    product("Long Sleeve Shirt", "$25.50", 10, "$255.00"),
    product("Cotton T-Shirt", "$10.99", 184, "$2023.16"),
    product("Lightweight Jacket", "$20.00", 184, "$3680.00"),
    product("Long Sleeve Shirt", "$25.50", 10, "$255.00"),
    product("Cotton T-Shirt", "$10.99", 184, "$2023.16"),
    product("Lightweight Jacket", "$20.00", 184, "$3680.00"),
    product("Long Sleeve Shirt", "$25.50", 10, "$255.00"),
    product("Cotton T-Shirt", "$10.99", 184, "$2023.16"),
    product("Lightweight Jacket", "$20.00", 184, "$3680.00"),
    product("Long Sleeve Shirt", "$25.50", 10, "$255.00"),
    product("Cotton T-Shirt", "$10.99", 184, "$2023.16"),
    product("Lightweight Jacket", "$20.00", 184, "$3680.00"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrafficSource {
    pub name: &'static str,
    pub value: f64,
}

pub static TRAFFIC_SOURCES: [TrafficSource; 4] = [
    TrafficSource {
        name: "Direct",
        value: 300.56,
    },
    TrafficSource {
        name: "Affilliate",
        value: 135.18,
    },
    TrafficSource {
        name: "Sponsored",
        value: 154.02,
    },
    TrafficSource {
        name: "E-mail",
        value: 48.96,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRevenue {
    pub location: &'static str,
    pub revenue: u64,
    pub max_revenue: u64,
}

pub static REVENUE_BY_LOCATION: [LocationRevenue; 4] = [
    LocationRevenue {
        location: "New York",
        revenue: 72,
        max_revenue: 100,
    },
    LocationRevenue {
        location: "San Francisco",
        revenue: 39,
        max_revenue: 100,
    },
    LocationRevenue {
        location: "Sydney",
        revenue: 25,
        max_revenue: 100,
    },
    LocationRevenue {
        location: "Singapore",
        revenue: 61,
        max_revenue: 100,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Bug,
    User,
    Subscribe,
}

impl NotificationKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            NotificationKind::Bug => "✱",
            NotificationKind::User => "☺",
            NotificationKind::Subscribe => "◉",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
    pub time: &'static str,
}

pub static NOTIFICATIONS: [Notification; 4] = [
    Notification {
        kind: NotificationKind::Bug,
        message: "You have a bug that needs ...",
        time: "Just now",
    },
    Notification {
        kind: NotificationKind::User,
        message: "New user registered",
        time: "59 minutes ago",
    },
    Notification {
        kind: NotificationKind::Bug,
        message: "You have a bug that needs ...",
        time: "12 hours ago",
    },
    Notification {
        kind: NotificationKind::Subscribe,
        message: "Andi Lane subscribed to you",
        time: "Today, 11:59 AM",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub action: &'static str,
    pub time: &'static str,
}

pub static ACTIVITIES: [Activity; 5] = [
    Activity {
        action: "You have a bug that needs...",
        time: "Just now",
    },
    Activity {
        action: "Released a new version",
        time: "59 minutes ago",
    },
    Activity {
        action: "Submitted a bug",
        time: "12 hours ago",
    },
    Activity {
        action: "Modified A data in Page X",
        time: "Today, 11:59 AM",
    },
    Activity {
        action: "Deleted a page in Project X",
        time: "Feb 2, 2023",
    },
];

pub static CONTACTS: [&str; 6] = [
    "Natali Craig",
    "Drew Cano",
    "Orlando Diggs",
    "Andi Lane",
    "Kate Morrison",
    "Koray Occumos",
];

pub static FAVORITES: [&str; 2] = ["Overview", "Projects"];
pub static RECENT: [&str; 2] = ["Recent Project 1", "Recent Project 2"];

pub const PROFILE_NAME: &str = "ByeWind";
