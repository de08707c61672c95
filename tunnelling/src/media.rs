use std::path::{Path, PathBuf};

/// File stem of the pre-rendered fission animation.
pub const ANIMATION_STEM: &str = "fission_tunnelling_demo";

/// Pre-rendered animation found in the results directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaArtifact {
    Video(PathBuf),
    Image(PathBuf),
    Missing,
}

/// Looks for the animation, preferring the mp4 video over the gif.
pub fn find_animation(results_dir: &Path) -> MediaArtifact {
    let video = results_dir.join(format!("{ANIMATION_STEM}.mp4"));
    if video.exists() {
        return MediaArtifact::Video(video);
    }

    let image = results_dir.join(format!("{ANIMATION_STEM}.gif"));
    if image.exists() {
        return MediaArtifact::Image(image);
    }

    log::warn!(
        "No animation file found in {}, export the animation frames and render them first.",
        results_dir.display()
    );
    MediaArtifact::Missing
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fallback_chain() {
        let dir = std::env::temp_dir().join(format!("tunnelling-media-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        assert_eq!(find_animation(&dir), MediaArtifact::Missing);

        let gif = dir.join("fission_tunnelling_demo.gif");
        std::fs::write(&gif, b"GIF89a").unwrap();
        assert_eq!(find_animation(&dir), MediaArtifact::Image(gif));

        let mp4 = dir.join("fission_tunnelling_demo.mp4");
        std::fs::write(&mp4, b"").unwrap();
        assert_eq!(find_animation(&dir), MediaArtifact::Video(mp4));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
