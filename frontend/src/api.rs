use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    ApiConfig, ApiError, DetectionRecord, MedicineApi, MedicineInfo, UpdateNameRequest,
    UpdateNameResponse, DETECT_UPLOAD_FIELD,
};

/// Browser client for the detection service, built on `fetch`.
pub struct GlooApi {
    config: ApiConfig,
}

impl GlooApi {
    pub fn new(config: ApiConfig) -> Self {
        log::info!("Using detection service at {}", config.base_url());
        Self { config }
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn request_error(err: gloo_net::Error) -> ApiError {
    ApiError::Request(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl MedicineApi for GlooApi {
    type Upload = GlooFile;

    async fn detect(&self, upload: &GlooFile) -> Result<DetectionRecord, ApiError> {
        let form_data = web_sys::FormData::new()
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form_data
            .append_with_blob_and_filename(DETECT_UPLOAD_FIELD, upload.as_ref(), &upload.name())
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let response = Request::post(&self.config.detect_url())
            .body(form_data)
            .map_err(request_error)?
            .send()
            .await
            .map_err(network_error)?;

        read_json(response).await
    }

    async fn update_medicine_name(
        &self,
        request: &UpdateNameRequest,
    ) -> Result<UpdateNameResponse, ApiError> {
        let response = Request::put(&self.config.update_name_url())
            .json(request)
            .map_err(request_error)?
            .send()
            .await
            .map_err(network_error)?;

        read_json(response).await
    }

    async fn get_medicine_info(&self, medicine_name: &str) -> Result<MedicineInfo, ApiError> {
        let response = Request::get(&self.config.medicine_info_url(medicine_name))
            .send()
            .await
            .map_err(network_error)?;

        read_json(response).await
    }
}
