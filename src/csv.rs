use crate::domain::*;
use crate::error::Result;
use crate::util::*;
use std::io::prelude::*;

/// One line per row, columns separated by ", ".
pub fn write_csv_2d<P: AsRef<std::path::Path>, DomainType: DomainView<2>>(
    domain: &DomainType,
    path: &P,
) -> Result<()> {
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_rows(domain, &mut output)?;
    output.flush()?;
    tracing::info!(path = ?path.as_ref(), "wrote csv");
    Ok(())
}

fn write_rows<W: Write, DomainType: DomainView<2>>(
    domain: &DomainType,
    output: &mut W,
) -> std::io::Result<()> {
    let aabb = domain.aabb();
    for row in aabb.bounds[(0, 0)]..=aabb.bounds[(0, 1)] {
        let r = domain.view(&vector![row, aabb.bounds[(1, 0)]]);
        write!(output, "{r}")?;
        for col in (aabb.bounds[(1, 0)] + 1)..=aabb.bounds[(1, 1)] {
            let r = domain.view(&vector![row, col]);
            write!(output, ", {r}")?;
        }
        writeln!(output)?;
    }
    Ok(())
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn write_csv_2d_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plate.csv");
        let mut domain = OwnedDomain::new(AABB::new(matrix![0, 1; 0, 2])).unwrap();
        domain.par_set_values(|c| (c[0] * 10 + c[1]) as f64 + 0.5, 2);
        write_csv_2d(&domain, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "0.5, 1.5, 2.5\n10.5, 11.5, 12.5\n");
    }
}
