//! Image endpoints

use reqwest::{
    multipart::{Form, Part},
    Method,
};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use recipe_core::ImageId;

use super::{send, ApiClient, ApiError, ApiResult};

#[derive(Deserialize)]
struct StoredImage {
    id_: ImageId,
}

impl ApiClient {
    /// Upload raw image bytes as multipart field `image`
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        file_name: String,
        mime_type: &str,
    ) -> ApiResult<ImageId> {
        let mut part = Part::bytes(bytes).file_name(file_name);
        if !mime_type.is_empty() {
            part = part.mime_str(mime_type)?;
        }
        let form = Form::new().part("image", part);

        let request = self.authed(Method::POST, "image/create")?.multipart(form);
        let stored: StoredImage = send(request).await?.json().await?;
        Ok(stored.id_)
    }

    pub async fn delete_image(&self, id: ImageId) -> ApiResult<()> {
        send(self.authed(Method::DELETE, &format!("image/{id}"))?).await?;
        Ok(())
    }

    /// Upload a file picked in an `<input type="file">`
    pub async fn upload_file(&self, file: web_sys::File) -> ApiResult<ImageId> {
        let bytes = read_file(&file).await.map_err(ApiError::File)?;
        self.upload_image(bytes, file.name(), &file.type_()).await
    }
}

async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let buffer = buffer
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|_| "not an ArrayBuffer".to_string())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
