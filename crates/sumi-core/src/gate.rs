//! Per-gesture input admission.

use crate::stroke::Tool;
use serde::{Deserialize, Serialize};

/// Physical source of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Touch,
    Stylus,
    Pointer,
}

/// Decide whether a gesture may begin for `tool` on this surface.
///
/// Large (tablet-class) surfaces only admit drawing tools from a stylus,
/// so a resting palm cannot paint; eraser gestures and small surfaces are
/// admitted unconditionally. The decision is made once at gesture start
/// and held for the gesture's lifetime.
pub fn admit(tool: Tool, device: DeviceKind, large_surface: bool) -> bool {
    if large_surface && tool.draws() {
        device == DeviceKind::Stylus
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_surface_gates_drawing_to_stylus() {
        for tool in [Tool::Pen, Tool::Pencil, Tool::Marker] {
            assert!(admit(tool, DeviceKind::Stylus, true));
            assert!(!admit(tool, DeviceKind::Touch, true));
            assert!(!admit(tool, DeviceKind::Pointer, true));
        }
    }

    #[test]
    fn test_eraser_always_admitted() {
        for device in [DeviceKind::Touch, DeviceKind::Stylus, DeviceKind::Pointer] {
            assert!(admit(Tool::Eraser, device, true));
            assert!(admit(Tool::Eraser, device, false));
        }
    }

    #[test]
    fn test_small_surface_admits_everything() {
        for tool in [Tool::Pen, Tool::Pencil, Tool::Marker, Tool::Eraser] {
            for device in [DeviceKind::Touch, DeviceKind::Stylus, DeviceKind::Pointer] {
                assert!(admit(tool, device, false));
            }
        }
    }
}
