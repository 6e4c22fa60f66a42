//! Document capability trait for the two document-dependent passes.
//!
//! The engine never walks a full DOM. It needs exactly two capabilities
//! from whatever hosts the page: named metadata lookup and enumeration of
//! embedded structured-data blocks. Any host satisfying this trait works —
//! a browser DOM bridge, a server-side parse tree, or the
//! [`StaticDocument`](crate::testing::StaticDocument) fixture.
//!
//! The trait is synchronous: hosts that read a document over I/O resolve
//! it before handing the view to `detect`.

/// Read-only view over the parts of a document the engine inspects.
pub trait DocumentView {
    /// Content of the named metadata element, if present.
    ///
    /// For an HTML host this is the `content` attribute of
    /// `<meta name="{name}">`. Returns `None` when the element is absent;
    /// an empty string is returned as-is and callers treat it as absent.
    fn meta_content(&self, name: &str) -> Option<String>;

    /// Raw text of every embedded structured-data block, in document order.
    ///
    /// For an HTML host these are the bodies of
    /// `<script type="application/ld+json">` elements. The engine parses
    /// each block itself and tolerates malformed entries.
    fn structured_data_blocks(&self) -> Vec<String>;
}
