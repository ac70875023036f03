/// Bounded numeric control state: values are clamped to `[min, max]` and
/// quantized to a fixed number of decimals, matching the editor's numeric
/// input widgets.
#[derive(Debug, Clone, Copy)]
pub struct NumericField {
    min: f32,
    max: f32,
    decimals: u32,
    value: f32,
}

impl NumericField {
    pub fn new(min: f32, max: f32, decimals: u32, initial: f32) -> Self {
        let mut field = Self {
            min,
            max,
            decimals,
            value: 0.0,
        };
        field.value = field.snap(initial);
        field
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value, returning `true` when the stored (clamped and
    /// quantized) value actually changed.
    pub fn set(&mut self, value: f32) -> bool {
        let snapped = self.snap(value);
        if snapped == self.value {
            return false;
        }
        self.value = snapped;
        true
    }

    fn snap(&self, value: f32) -> f32 {
        let scale = 10f32.powi(self.decimals as i32);
        (value.clamp(self.min, self.max) * scale).round() / scale
    }
}
