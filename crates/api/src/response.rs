use serde::Serialize;

/// Success envelope: `{ "data": ... }`. A slug lookup that finds nothing
/// serializes as `{ "data": null }`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
