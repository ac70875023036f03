use glam::Vec2;
use segment::{run_segmentation, MaskService, SegmentRun};
use splat_cmn::{CameraMode, CameraRig, EditSink, FrameCapture};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::drag::{DragController, DragMode, OverlayRect};
use crate::error::Result;
use crate::input::NumericField;

/// Camera-driven segmentation tool: a center-symmetric rectangle drag
/// prompts the remote mask service from several orbit angles.
///
/// While active the tool owns the pointer gesture and a cancellation
/// token for the running orchestration; deactivation releases both
/// deterministically, whatever state the gesture or run is in.
#[derive(Debug)]
pub struct SegmentTool {
    viewport: Vec2,
    angles: NumericField,
    drag: DragController,
    cancel: CancellationToken,
    active: bool,
}

impl SegmentTool {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            angles: NumericField::new(1.0, 8.0, 0, 1.0),
            drag: DragController::new(DragMode::CenterSymmetric, viewport),
            cancel: CancellationToken::new(),
            active: false,
        }
    }

    /// Re-targets the camera at the origin, switches to point-center
    /// rendering, and arms a fresh cancellation token.
    pub fn activate<C: CameraRig>(&mut self, camera: &mut C) {
        let pose = camera.pose();
        camera.set_pose(pose.retargeted_to_origin());
        camera.set_mode(CameraMode::Centers);

        self.cancel = CancellationToken::new();
        self.active = true;
        debug!("segment tool activated");
    }

    /// Cancels any in-flight run and aborts a live drag without emitting
    /// a rectangle. The tool stays usable for a later activation.
    pub fn deactivate(&mut self) {
        self.cancel.cancel();
        if self.drag.cancel() {
            debug!("drag aborted by deactivation");
        }
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.drag.set_viewport(viewport);
    }

    pub fn angle_count(&self) -> u32 {
        self.angles.value() as u32
    }

    pub fn set_angle_count(&mut self, value: f32) {
        self.angles.set(value);
    }

    pub fn on_press(&mut self, pointer: u64, primary: bool, pos: Vec2) -> Option<OverlayRect> {
        if !self.active {
            return None;
        }
        self.drag.press(pointer, primary, pos)
    }

    pub fn on_move(&mut self, pointer: u64, pos: Vec2) -> Option<OverlayRect> {
        self.drag.moved(pointer, pos)
    }

    /// Finishes the drag. The returned plan is ready for
    /// [`SegmentTool::segment`].
    pub fn on_release(&mut self, pointer: u64) -> Option<SegmentRun> {
        let region = self.drag.release(pointer)?;
        Some(SegmentRun {
            region,
            width: self.viewport.x as u32,
            height: self.viewport.y as u32,
            angles: self.angle_count(),
        })
    }

    /// Runs the orbit capture/segment loop. A deactivation at any point
    /// stops further angles and the camera pose is always restored.
    pub async fn segment<C, F, E, M>(
        &self,
        run: &SegmentRun,
        camera: &mut C,
        capture: &mut F,
        sink: &mut E,
        service: &M,
    ) -> Result<u32>
    where
        C: CameraRig,
        F: FrameCapture,
        E: EditSink,
        M: MaskService + ?Sized,
    {
        let applied = run_segmentation(run, camera, capture, sink, service, &self.cancel).await?;
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use glam::{vec2, vec3};
    use segment::SegmentError;
    use splat_cmn::{CameraPose, MaskImage, Rect, SelectionOp};

    struct FakeRig {
        pose: CameraPose,
        mode: Option<CameraMode>,
    }

    impl FakeRig {
        fn new() -> Self {
            Self {
                pose: CameraPose::new(vec3(0.0, 5.0, 10.0), vec3(1.0, 2.0, 3.0)),
                mode: None,
            }
        }
    }

    impl CameraRig for FakeRig {
        fn pose(&self) -> CameraPose {
            self.pose
        }

        fn set_pose(&mut self, pose: CameraPose) {
            self.pose = pose;
        }

        fn set_mode(&mut self, mode: CameraMode) {
            self.mode = Some(mode);
        }
    }

    struct FakeCapture;

    #[async_trait]
    impl FrameCapture for FakeCapture {
        async fn capture(&mut self, width: u32, height: u32) -> anyhow::Result<Vec<u8>> {
            Ok(vec![0u8; MaskImage::expected_len(width, height)])
        }
    }

    #[derive(Default)]
    struct RecordingSink(Vec<SelectionOp>);

    impl EditSink for RecordingSink {
        fn submit(&mut self, op: SelectionOp) -> anyhow::Result<()> {
            self.0.push(op);
            Ok(())
        }
    }

    struct FakeService;

    #[async_trait]
    impl MaskService for FakeService {
        async fn segment(
            &self,
            _frame: &[u8],
            _region: Rect,
            width: u32,
            height: u32,
        ) -> segment::Result<MaskImage> {
            Ok(MaskImage::new(
                width,
                height,
                vec![0u8; MaskImage::expected_len(width, height)],
            ))
        }
    }

    #[test]
    fn test_activation_retargets_camera() {
        let mut tool = SegmentTool::new(vec2(800.0, 600.0));
        let mut rig = FakeRig::new();

        tool.activate(&mut rig);
        assert!(tool.is_active());
        assert_eq!(rig.pose.position, vec3(0.0, 5.0, 10.0));
        assert_eq!(rig.pose.target, vec3(0.0, 0.0, 0.0));
        assert_eq!(rig.mode, Some(CameraMode::Centers));
    }

    #[test]
    fn test_release_builds_run_from_drag() {
        let mut tool = SegmentTool::new(vec2(800.0, 600.0));
        let mut rig = FakeRig::new();
        tool.activate(&mut rig);
        tool.set_angle_count(4.0);

        tool.on_press(7, true, vec2(600.0, 400.0)).unwrap();
        let run = tool.on_release(7).unwrap();
        assert_eq!(run.region.start, vec2(200.0, 200.0));
        assert_eq!(run.region.end, vec2(600.0, 400.0));
        assert_eq!((run.width, run.height), (800, 600));
        assert_eq!(run.angles, 4);
    }

    #[test]
    fn test_inactive_tool_ignores_presses() {
        let mut tool = SegmentTool::new(vec2(800.0, 600.0));
        assert!(tool.on_press(1, true, vec2(100.0, 100.0)).is_none());
    }

    #[test]
    fn test_deactivation_mid_drag_cleans_up() {
        let mut tool = SegmentTool::new(vec2(800.0, 600.0));
        let mut rig = FakeRig::new();
        tool.activate(&mut rig);

        tool.on_press(1, true, vec2(500.0, 300.0)).unwrap();
        tool.deactivate();
        // Cancellation, not completion: no rectangle comes out.
        assert!(tool.on_release(1).is_none());
        assert!(!tool.is_active());
    }

    #[tokio::test]
    async fn test_segment_runs_after_reactivation() {
        let mut tool = SegmentTool::new(vec2(16.0, 16.0));
        let mut rig = FakeRig::new();
        let mut sink = RecordingSink::default();

        // A previous deactivation must not poison the next run.
        tool.activate(&mut rig);
        tool.deactivate();
        tool.activate(&mut rig);

        tool.on_press(1, true, vec2(12.0, 12.0)).unwrap();
        let run = tool.on_release(1).unwrap();
        let applied = tool
            .segment(&run, &mut rig, &mut FakeCapture, &mut sink, &FakeService)
            .await
            .unwrap();
        assert_eq!(applied, 1);
        assert_eq!(sink.0.len(), 3);
    }

    #[tokio::test]
    async fn test_deactivated_tool_cannot_mutate() {
        let mut tool = SegmentTool::new(vec2(16.0, 16.0));
        let mut rig = FakeRig::new();
        let mut sink = RecordingSink::default();

        tool.activate(&mut rig);
        tool.on_press(1, true, vec2(12.0, 12.0)).unwrap();
        let run = tool.on_release(1).unwrap();
        tool.deactivate();

        let err = tool
            .segment(&run, &mut rig, &mut FakeCapture, &mut sink, &FakeService)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::ToolError::Segment(SegmentError::Cancelled)
        ));
        assert!(sink.0.is_empty());
    }
}
