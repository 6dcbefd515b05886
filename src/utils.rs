use ordered_float::OrderedFloat;
use three_d::{egui::Color32, Srgba, Vec3};

/// A [`Vec3`] which can be hashed and compared exactly, so that points can be used as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderedVec3([OrderedFloat<f32>; 3]);

impl From<Vec3> for OrderedVec3 {
    fn from(v: Vec3) -> Self {
        Self([v.x, v.y, v.z].map(OrderedFloat))
    }
}

pub fn darken_color(c: Color32, factor: f32) -> Color32 {
    lerp_color(Color32::BLACK, c, factor)
}

pub fn lerp_color(a: Color32, b: Color32, factor: f32) -> Color32 {
    let lerp = |a: u8, b: u8| -> u8 {
        let lerped_f32 = (a as f32) * (1.0 - factor) + (b as f32) * factor;
        lerped_f32 as u8
    };
    Color32::from_rgba_premultiplied(
        lerp(a.r(), b.r()),
        lerp(a.g(), b.g()),
        lerp(a.b(), b.b()),
        lerp(a.a(), b.a()),
    )
}

pub fn egui_color_to_srgba(c: Color32) -> Srgba {
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    Srgba { r, g, b, a }
}

#[cfg(test)]
mod tests {
    use three_d::vec3;

    use super::*;

    #[test]
    fn ordered_vec3_equality() {
        assert_eq!(
            OrderedVec3::from(vec3(1.0, -2.0, 0.5)),
            OrderedVec3::from(vec3(1.0, -2.0, 0.5))
        );
        assert_ne!(
            OrderedVec3::from(vec3(1.0, -2.0, 0.5)),
            OrderedVec3::from(vec3(1.0, 2.0, 0.5))
        );
    }

    #[test]
    fn darkening() {
        let c = Color32::from_rgb(200, 100, 50);
        assert_eq!(darken_color(c, 1.0), c);
        assert_eq!(darken_color(c, 0.5), Color32::from_rgb(100, 50, 25));
    }
}
