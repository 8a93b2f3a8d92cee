/// Display name given to the site owner when it is first created.
pub const DEFAULT_DISPLAY_NAME: &str = "Admin";

/// The site owner record always lives at this id.
pub const SITE_OWNER_ID: i32 = 1;

pub mod limits {

    pub const TITLE_MAX_CHARS: usize = 60;

    pub const YEAR_MAX_CHARS: usize = 4;

    pub const ACTOR_MAX_CHARS: usize = 60;

    pub const DISPLAY_NAME_MAX_CHARS: usize = 20;

    pub const USERNAME_MAX_CHARS: usize = 20;
}

pub mod sort {

    pub const YEAR_ASC: &str = "year_asc";

    pub const YEAR_DESC: &str = "year_desc";
}

pub mod session_keys {

    pub const OWNER_ID: &str = "owner_id";

    pub const FLASHES: &str = "flashes";
}

pub mod messages {

    pub const INVALID_INPUT: &str = "Invalid input.";

    pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";

    pub const LOGIN_SUCCESS: &str = "Login success.";

    pub const LOGIN_REQUIRED: &str = "Please log in to access this page.";

    pub const GOODBYE: &str = "Goodbye.";

    pub const ITEM_CREATED: &str = "Item created.";

    pub const ITEM_UPDATED: &str = "Item updated.";

    pub const ITEM_DELETED: &str = "Item deleted.";

    pub const SETTINGS_UPDATED: &str = "Settings updated.";
}

/// Sample catalog written when the site owner is first created.
pub const SEED_MOVIES: [(&str, &str, &str); 10] = [
    ("My Neighbor Totoro", "1988", "akk"),
    ("Dead Poets Society", "1989", "yzn"),
    ("A Perfect World", "1993", "was"),
    ("Leon", "1994", "akk"),
    ("Mahjong", "1996", "was"),
    ("Swallowtail Butterfly", "1996", "hnm"),
    ("King of Comedy", "1999", "ert"),
    ("Devils on the Doorstep", "1999", "def"),
    ("WALL-E", "2008", "ret"),
    ("The Pork of Music", "2012", "thy"),
];
