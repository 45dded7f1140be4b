//! Request and response shapes of the Geo Engine API.

mod common;
mod datasets;
mod general;
mod layers;
mod ogc;
mod permissions;
mod plots;
mod projects;
mod session;
mod spatial_references;
mod tasks;
mod uploads;
mod workflows;

pub use common::{
    BoundingBox2D, Coordinate2D, ErrorResponse, IdResponse, OrderBy, Provenance,
    RasterQueryRectangle, Role, STRectangle, SpatialPartition2D, SpatialResolution, TimeInterval,
};
pub use datasets::{
    AddDataset, AutoCreateDataset, CreateDataset, DataPath, Dataset, DatasetDefinition,
    DatasetListing, DatasetNameResponse, MetaDataSuggestion, SuggestMetaData, Volume,
};
pub use general::ServerInfo;
pub use layers::{
    AddLayer, AddLayerCollection, CollectionItem, Layer, LayerCollection, LayerCollectionListing,
    LayerListing, ProviderLayerCollectionId, ProviderLayerId, SearchType,
};
pub use ogc::GeoJson;
pub use permissions::{Permission, PermissionListing, PermissionRequest, Resource};
pub use plots::{PlotOutputFormat, WrappedPlotOutput};
pub use projects::{
    CreateProject, LayerUpdate, LayerVisibility, Plot, PlotUpdate, Project, ProjectLayer,
    ProjectListing, ProjectOrder, ProjectUpdateToken, ProjectVersion, TimeGranularity, TimeStep,
    UpdateProject,
};
pub use session::{
    AddRole, Quota, RoleDescription, UpdateQuota, UserCredentials, UserInfo, UserRegistration,
    UserSession,
};
pub use spatial_references::{AxisOrder, SpatialReferenceSpecification};
pub use tasks::{TaskFilter, TaskStatus, TaskStatusWithId};
pub use uploads::{UploadFileLayersResponse, UploadFilesResponse};
pub use workflows::{
    ProvenanceEntry, RasterDatasetFromWorkflow, TaskResponse, TypedResultDescriptor, Workflow,
    WorkflowType,
};
