use splat_cmn::{CameraRig, EditSink, FrameCapture, Rect, SelectionOp, SelectionSource};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::client::MaskService;
use crate::error::{Result, SegmentError};
use crate::orbit::orbit_poses;

/// One operator-initiated segmentation pass: the finished drag rectangle,
/// the viewport it was drawn over, and how many orbit angles to capture.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRun {
    pub region: Rect,
    pub width: u32,
    pub height: u32,
    pub angles: u32,
}

/// Drives the capture/segment/mutate loop over every orbit angle.
///
/// Strictly sequential: the camera pose is a single shared resource and a
/// captured frame is only valid for the pose active at capture time, so
/// angle `i + 1` never starts before angle `i`'s mutations are applied.
/// The pre-run camera pose is restored on every exit path. Mutations from
/// completed angles are not rolled back on failure or cancellation.
///
/// Returns the number of fully applied angles.
pub async fn run_segmentation<C, F, E, M>(
    run: &SegmentRun,
    camera: &mut C,
    capture: &mut F,
    sink: &mut E,
    service: &M,
    cancel: &CancellationToken,
) -> Result<u32>
where
    C: CameraRig,
    F: FrameCapture,
    E: EditSink,
    M: MaskService + ?Sized,
{
    let original = camera.pose();
    let result = drive(run, camera, capture, sink, service, cancel).await;
    camera.set_pose(original);

    match &result {
        Ok(angles) => info!(angles, "segmentation run finished"),
        Err(SegmentError::Cancelled) => debug!("segmentation run cancelled"),
        Err(err) => tracing::error!(error = %err, "segmentation run aborted"),
    }
    result
}

async fn drive<C, F, E, M>(
    run: &SegmentRun,
    camera: &mut C,
    capture: &mut F,
    sink: &mut E,
    service: &M,
    cancel: &CancellationToken,
) -> Result<u32>
where
    C: CameraRig,
    F: FrameCapture,
    E: EditSink,
    M: MaskService + ?Sized,
{
    let mut applied = 0;
    for pose in orbit_poses(&camera.pose(), run.angles) {
        if cancel.is_cancelled() {
            return Err(SegmentError::Cancelled);
        }

        camera.set_pose(pose);
        let frame = capture
            .capture(run.width, run.height)
            .await
            .map_err(SegmentError::Capture)?;

        // Deactivation during the capture round trip must stop the run
        // before any request reaches the remote service.
        if cancel.is_cancelled() {
            return Err(SegmentError::Cancelled);
        }

        let mask = service
            .segment(&frame, run.region, run.width, run.height)
            .await?;

        // The tool may have been deactivated while the request was in
        // flight; a stale mask must not touch the selection.
        if cancel.is_cancelled() {
            return Err(SegmentError::Cancelled);
        }

        // Set, invert, delete: the mutation order is part of the edit
        // protocol and must not be reordered.
        sink.submit(SelectionOp::Set(SelectionSource::Mask(mask)))
            .map_err(SegmentError::Edit)?;
        sink.submit(SelectionOp::Invert).map_err(SegmentError::Edit)?;
        sink.submit(SelectionOp::Delete).map_err(SegmentError::Edit)?;

        applied += 1;
        debug!(angle = applied, of = run.angles, "angle applied");
    }
    Ok(applied)
}
