use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html><html><body>\
<p>The form bundle is missing. Run <code>trunk build</code> in <code>frontend/</code> and rebuild the backend.</p>\
</body></html>";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    } else if !out_dir.join("dist").exists() {
        // include_dir! needs the directory to exist even without a frontend build.
        fs::create_dir_all(out_dir.join("dist")).unwrap();
        fs::write(out_dir.join("dist").join("index.html"), PLACEHOLDER_INDEX).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
