pub mod cytoscape;

use std::fs::File;
use std::io::prelude::*;

///
/// write string into a file
///
pub fn write_string<P: AsRef<std::path::Path>>(filename: P, string: &str) -> std::io::Result<()> {
    let mut file = File::create(filename)?;
    file.write_all(string.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_string_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_string(&path, "ACGT\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ACGT\n");
    }
}
