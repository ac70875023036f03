use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use splat_cmn::{MaskImage, Rect};
use tracing::debug;

use crate::error::{Result, SegmentError};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Remote mask service boundary. Implemented over HTTP by
/// [`SegmentClient`]; tests substitute in-process fakes.
#[async_trait]
pub trait MaskService: Send + Sync {
    /// Segment the given rendered frame, prompted by `region` (pixel
    /// units relative to the frame). Any failure must surface as an
    /// error; an empty mask is never a valid fallback.
    async fn segment(
        &self,
        frame: &[u8],
        region: Rect,
        width: u32,
        height: u32,
    ) -> Result<MaskImage>;
}

/// HTTP client for the segmentation server.
///
/// Wire contract: multipart POST with integer fields `x0,y0,x1,y1` (the
/// prompt box), `width,height` (frame size) and a binary `rendering` part
/// holding the raw RGBA frame. The response body is the raw RGBA mask,
/// exactly `width * height * 4` bytes.
pub struct SegmentClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SegmentClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }
}

impl Default for SegmentClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl MaskService for SegmentClient {
    async fn segment(
        &self,
        frame: &[u8],
        region: Rect,
        width: u32,
        height: u32,
    ) -> Result<MaskImage> {
        let region = region.normalized();
        let form = Form::new()
            .text("x0", format!("{:.0}", region.start.x))
            .text("y0", format!("{:.0}", region.start.y))
            .text("x1", format!("{:.0}", region.end.x))
            .text("y1", format!("{:.0}", region.end.y))
            .text("width", width.to_string())
            .text("height", height.to_string())
            .part(
                "rendering",
                Part::bytes(frame.to_vec()).file_name("data.bin"),
            );

        let res = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(SegmentError::Status(status));
        }

        let body = res.bytes().await?;
        let expected = MaskImage::expected_len(width, height);
        if body.len() != expected {
            return Err(SegmentError::MaskSize {
                expected,
                got: body.len(),
            });
        }

        debug!(width, height, "mask received");
        Ok(MaskImage::new(width, height, body.to_vec()))
    }
}
