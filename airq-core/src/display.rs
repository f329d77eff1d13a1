use crate::model::MetricsRecord;

/// Where fetch results land: a title, a subtitle and five metric fields.
///
/// The pipeline calls exactly one of [`render_metrics`] or [`render_no_data`]
/// per attempt that got past city resolution, and neither when the city id
/// was unknown. Absent fields are rendered as [`crate::model::NO_INFO`].
///
/// [`render_metrics`]: DisplaySink::render_metrics
/// [`render_no_data`]: DisplaySink::render_no_data
pub trait DisplaySink {
    fn set_title(&mut self, text: &str);
    fn set_subtitle(&mut self, text: &str);
    fn render_metrics(&mut self, record: &MetricsRecord);
    fn render_no_data(&mut self);
}
