use crate::board::BOARD_SIZE;

/// Maps window coordinates to the fixed 500x500 board. The board is centered
/// in the window at 1:1 scale; there is no zoom or pan.
pub struct CanvasTransform {
    pub offset: [f32; 2],
}

impl CanvasTransform {
    pub fn new() -> Self {
        Self { offset: [0.0, 0.0] }
    }

    /// Recenters the board after a window resize.
    pub fn fit_window(&mut self, window_size: (f32, f32)) {
        self.offset = [
            ((window_size.0 - BOARD_SIZE) / 2.0).max(0.0),
            ((window_size.1 - BOARD_SIZE) / 2.0).max(0.0),
        ];
    }

    pub fn screen_to_board(&self, screen_pos: [f32; 2]) -> [f32; 2] {
        [screen_pos[0] - self.offset[0], screen_pos[1] - self.offset[1]]
    }

    pub fn is_on_board(&self, screen_pos: [f32; 2]) -> bool {
        let pos = self.screen_to_board(screen_pos);
        (0.0..=BOARD_SIZE).contains(&pos[0]) && (0.0..=BOARD_SIZE).contains(&pos[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_centered_in_a_large_window() {
        let mut transform = CanvasTransform::new();
        transform.fit_window((900.0, 700.0));
        assert_eq!(transform.offset, [200.0, 100.0]);
        assert_eq!(transform.screen_to_board([200.0, 100.0]), [0.0, 0.0]);
        assert!(transform.is_on_board([450.0, 350.0]));
        assert!(!transform.is_on_board([100.0, 100.0]));
    }

    #[test]
    fn small_windows_pin_the_board_to_the_origin() {
        let mut transform = CanvasTransform::new();
        transform.fit_window((300.0, 300.0));
        assert_eq!(transform.offset, [0.0, 0.0]);
    }
}
