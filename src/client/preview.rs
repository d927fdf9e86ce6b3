use super::{encoder, types::VideoMeta};
use crate::Result;
use std::path::{Path, PathBuf};

type ReleaseHook = Box<dyn FnOnce() + Send>;

/// Playable local reference to a selected file. The viewer resource
/// behind it is released exactly once, on explicit `release` or on
/// drop, whichever comes first.
pub struct Preview {
    url: String,
    on_release: Option<ReleaseHook>,
}

impl Preview {
    fn new(path: &Path) -> Self {
        Self {
            url: format!("file://{}", path.display()),
            on_release: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Registers a hook invoked when the preview is released, for
    /// embedders that hand the URL to a viewer needing teardown.
    pub fn set_release_hook(&mut self, hook: impl FnOnce() + Send + 'static) {
        self.on_release = Some(Box::new(hook));
    }

    pub fn release(&mut self) {
        if let Some(hook) = self.on_release.take() {
            hook();
        }
    }
}

impl Drop for Preview {
    fn drop(&mut self) {
        self.release();
    }
}

/// A validated file selection and its preview. Replacing or clearing
/// the selection releases the previous preview.
pub struct Selection {
    path: PathBuf,
    meta: VideoMeta,
    preview: Preview,
}

impl Selection {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let meta = encoder::validate(&path).await?;
        let preview = Preview::new(&path);

        Ok(Self {
            path,
            meta,
            preview,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn meta(&self) -> &VideoMeta {
        &self.meta
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut Preview {
        &mut self.preview
    }

    /// Swaps in a new file, releasing the old preview. On validation
    /// failure the current selection stays untouched.
    pub async fn replace(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let replacement = Self::open(path).await?;
        *self = replacement;
        Ok(())
    }

    /// Releases the preview and discards the selection.
    pub fn clear(mut self) {
        self.preview.release();
    }
}
