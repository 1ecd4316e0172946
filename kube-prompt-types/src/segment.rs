use serde::{Serialize, Serializer};
use std::fmt;

/// Identifies one of the kubernetes prompt segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKey {
    KubeIcon,
    KubeCluster,
    KubeContext,
    KubeNamespace,
}

impl SegmentKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKey::KubeIcon => "kube-icon",
            SegmentKey::KubeCluster => "kube-cluster",
            SegmentKey::KubeContext => "kube-context",
            SegmentKey::KubeNamespace => "kube-namespace",
        }
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SegmentKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Content and 256-color pair of a single segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub foreground: u8,
    pub background: u8,
}

/// A keyed segment as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySegment {
    pub key: SegmentKey,
    pub text: String,
    pub foreground: u8,
    pub background: u8,
}

impl DisplaySegment {
    pub fn new(key: SegmentKey, segment: Segment) -> Self {
        DisplaySegment {
            key,
            text: segment.content,
            foreground: segment.foreground,
            background: segment.background,
        }
    }
}

/// Ordered-append target for produced segments.
pub trait SegmentSink {
    fn append_segment(&mut self, key: SegmentKey, segment: Segment);
}

impl SegmentSink for Vec<DisplaySegment> {
    fn append_segment(&mut self, key: SegmentKey, segment: Segment) {
        self.push(DisplaySegment::new(key, segment));
    }
}
