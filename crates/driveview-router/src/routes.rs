//! The file browser's route table.
//!
//! | name        | pattern            | view                  |
//! |-------------|--------------------|-----------------------|
//! | `home`      | `/`                | `FolderView`          |
//! | `list`      | `/list/:p*`        | `FolderView`          |
//! | `video`     | `/video/:p*`       | `VideoView`           |
//! | `not-found` | `/:pathMatch(.*)*` | `NotFoundView` (lazy) |

use crate::error::RouteError;
use crate::view::{View, ViewRef};
use crate::RouteTable;

pub const HOME: &str = "home";
pub const LIST: &str = "list";
pub const VIDEO: &str = "video";
pub const NOT_FOUND: &str = "not-found";

pub const FOLDER_VIEW: &str = "FolderView";
pub const VIDEO_VIEW: &str = "VideoView";
pub const NOT_FOUND_VIEW: &str = "NotFoundView";

/// Builds the file browser table
pub fn file_browser(case_insensitive: bool) -> Result<RouteTable, RouteError> {
    RouteTable::builder()
        .case_insensitive(case_insensitive)
        .route(HOME, "/", ViewRef::eager(FOLDER_VIEW))
        .route(LIST, "/list/:p*", ViewRef::eager(FOLDER_VIEW))
        .route(VIDEO, "/video/:p*", ViewRef::eager(VIDEO_VIEW))
        .route(
            NOT_FOUND,
            "/:pathMatch(.*)*",
            ViewRef::lazy(|| async { Ok(View::new(NOT_FOUND_VIEW)) }),
        )
        .build()
}
