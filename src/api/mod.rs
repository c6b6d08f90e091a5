pub mod matching;
pub mod tables;

pub use matching::{handle_match, MatchRequest, __path_handle_match};
pub use tables::{
    handle_list_orders, handle_list_pigments, handle_upload_orders, handle_upload_pigments,
    OrderTableResponse, PigmentTableResponse, UploadOrdersRequest, UploadPigmentsRequest,
    UploadResponse, __path_handle_list_orders, __path_handle_list_pigments,
    __path_handle_upload_orders, __path_handle_upload_pigments,
};
