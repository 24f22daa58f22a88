use crate::domain::*;
use crate::error::Result;

/// Write a 2D domain as a TURBO heat map.
/// Values are scaled by `max_value` and clamped into the gradient,
/// rows run down the image and columns across it.
pub fn image2d<F: AsRef<std::path::Path>, DomainType: DomainView<2>>(
    domain: &DomainType,
    max_value: f64,
    s: &F,
) -> Result<()> {
    profiling::scope!("image2d");
    let aabb = domain.aabb();
    let exclusive_bounds = aabb.exclusive_bounds();
    let min = aabb.min();
    let gradient = colorous::TURBO;
    let mut img = image::RgbImage::new(
        exclusive_bounds[1] as u32,
        exclusive_bounds[0] as u32,
    );
    for coord in aabb.coord_iter() {
        let r = (domain.view(&coord) / max_value).clamp(0.0, 1.0);
        let c = gradient.eval_continuous(r);
        img.put_pixel(
            (coord[1] - min[1]) as u32,
            (coord[0] - min[0]) as u32,
            image::Rgb(c.as_array()),
        );
    }
    img.save(s)?;
    tracing::info!(path = ?s.as_ref(), "wrote image");
    Ok(())
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::util::*;

    #[test]
    fn image2d_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plate.png");
        let mut domain = OwnedDomain::new(AABB::new(matrix![0, 3; 0, 5])).unwrap();
        domain.par_set_values(|c| (c[0] * 10 + c[1]) as f64, 4);
        image2d(&domain, 100.0, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 6);
        assert_eq!(img.height(), 4);
        let cold = colorous::TURBO.eval_continuous(0.0).as_array();
        let warm = colorous::TURBO.eval_continuous(0.35).as_array();
        assert_eq!(img.get_pixel(0, 0).0, cold);
        assert_eq!(img.get_pixel(5, 3).0, warm);
    }
}
