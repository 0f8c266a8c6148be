use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, PartialEq, Eq, ToSchema)]
pub struct PingResponse {
    pub ok: bool,
}
