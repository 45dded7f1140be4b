//! The API groups of the Geo Engine backend, re-exported under one namespace.
//!
//! Every symbol is re-exported by name, so two groups exporting the same name
//! is a compile error here. The same lists feed `API_GROUPS`, which `registry`
//! aggregates into the runtime surface.

pub mod datasets_api;
pub mod general_api;
pub mod layers_api;
pub mod ogcwcs_api;
pub mod ogcwfs_api;
pub mod ogcwms_api;
pub mod permissions_api;
pub mod plots_api;
pub mod projects_api;
pub mod session_api;
pub mod spatial_references_api;
pub mod tasks_api;
pub mod uploads_api;
pub mod user_api;
pub mod workflows_api;

pub mod registry;

use registry::ApiGroup;

/// Re-exports each group's symbols by name and records the same names in
/// `API_GROUPS`, so the runtime surface always matches the compiled one.
macro_rules! api_groups {
    ($($name:literal => $module:ident { $($symbol:ident),+ $(,)? }),+ $(,)?) => {
        $(pub use $module::{$($symbol),+};)+

        const GROUP_COUNT: usize = [$($name),+].len();

        /// The shipped groups in declaration order.
        pub const API_GROUPS: [ApiGroup; GROUP_COUNT] = [
            $(ApiGroup::new($name, &[$(stringify!($symbol)),+])),+
        ];
    };
}

api_groups! {
    "Datasets" => datasets_api { DatasetsApi, ListDatasetsParams },
    "General" => general_api { GeneralApi },
    "Layers" => layers_api { LayersApi, CollectionPage, LayerSearchParams },
    "OGCWCS" => ogcwcs_api { OGCWCSApi, GetCoverageParams, WcsVersion },
    "OGCWFS" => ogcwfs_api { OGCWFSApi, GetFeatureParams },
    "OGCWMS" => ogcwms_api { OGCWMSApi, GetMapParams },
    "Permissions" => permissions_api { PermissionsApi },
    "Plots" => plots_api { PlotsApi, PlotQueryParams },
    "Projects" => projects_api { ProjectsApi, ListProjectsParams },
    "Session" => session_api { SessionApi },
    "SpatialReferences" => spatial_references_api { SpatialReferencesApi },
    "Tasks" => tasks_api { TasksApi, ListTasksParams },
    "Uploads" => uploads_api { UploadsApi, UploadFile },
    "User" => user_api { UserApi },
    "Workflows" => workflows_api { WorkflowsApi, MetadataArchive },
}
