use rowshape_api::ShapeError;

#[derive(Debug, thiserror::Error)]
pub enum PayReportError {
    #[error("{0}")]
    Shape(#[from] ShapeError),

    #[error("response body: {0}")]
    BodyParse(#[from] serde_json::Error),
}
