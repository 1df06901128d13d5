use eyre::Result;
use framefold::collapse;
use framefold::filter::{filter_extensions, parse_filter};
use framefold::fs::scan_folder;
use std::fs;
use tempfile::tempdir;

#[test]
fn scan_then_collapse() -> Result<()> {
    let tmpdir = tempdir()?;
    let root = tmpdir.path();

    let renders = root.join("renders");
    fs::create_dir_all(&renders)?;
    for frame in 1..=12 {
        fs::write(renders.join(format!("beauty.{frame:04}.exr")), "")?;
    }
    fs::write(root.join("readme.txt"), "hello")?;
    fs::write(root.join("thumb.PNG"), "")?;

    let files = scan_folder(root)?;
    assert_eq!(files.len(), 14);

    let collapsed = collapse(&files);
    let beauty = renders.join("beauty.1-12.exr");
    assert_eq!(collapsed.len(), 3);
    assert!(collapsed.contains(&beauty.to_string_lossy().into_owned()));
    assert!(collapsed.contains(&root.join("readme.txt").to_string_lossy().into_owned()));

    let images = filter_extensions(files, &parse_filter("png exr"));
    assert_eq!(images.len(), 13);
    assert!(images.iter().all(|p| !p.ends_with("readme.txt")));

    Ok(())
}

#[test]
fn scan_skips_directories() -> Result<()> {
    let tmpdir = tempdir()?;
    fs::create_dir_all(tmpdir.path().join("a.0001.b"))?;
    let files = scan_folder(tmpdir.path())?;
    assert!(files.is_empty());
    Ok(())
}

#[test]
fn scan_rejects_plain_file() -> Result<()> {
    let tmpdir = tempdir()?;
    let file = tmpdir.path().join("x.txt");
    fs::write(&file, "")?;
    assert!(scan_folder(&file).is_err());
    Ok(())
}

#[cfg(unix)]
#[test]
fn scan_lists_symlinked_frames() -> Result<()> {
    let tmpdir = tempdir()?;
    let root = tmpdir.path();
    let real = root.join("real.0001.exr");
    fs::write(&real, "")?;
    std::os::unix::fs::symlink(&real, root.join("link.0001.exr"))?;
    std::os::unix::fs::symlink(root.join("gone.exr"), root.join("dangling.0001.exr"))?;

    let files = scan_folder(root)?;
    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|p| p.ends_with("link.0001.exr")));
    assert!(files.iter().any(|p| p.ends_with("real.0001.exr")));

    assert_eq!(collapse(&files).len(), 2);
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn scan_skips_non_utf8_names() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmpdir = tempdir()?;
    let root = tmpdir.path();
    fs::write(root.join(OsStr::from_bytes(b"bad\xff.0001.exr")), "")?;
    fs::write(root.join("good.0001.exr"), "")?;

    let files = scan_folder(root)?;
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("good.0001.exr"));
    assert!(files.iter().all(|p| !p.contains('\u{FFFD}')));
    Ok(())
}
