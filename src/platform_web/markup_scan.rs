use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::api::{NumericElement, PageMarkup, ProgressRing, StatCard};
use crate::core::ElementId;
use crate::core::dom::{
    BAR_FILL_CLASS, CIRCULAR_PROGRESS_CLASS, COUNT_CLASS, DATA_PERCENTAGE, DATA_TARGET, DATA_WIDTH,
    INDUSTRY_BAR_CLASS, KPI_NUMBER_CLASS, PROGRESS_NUMBER_CLASS, PROGRESS_RING_CLASS,
    REVEAL_CLASS, STAT_CARD_CLASS, STATS_SECTION_ID,
};
use crate::error::MotionResult;

use super::chart_js::host_error;
use super::dom_sink::WebDomSink;

/// Elements per observer with the key that observer's watcher knows them by.
///
/// One element may carry several roles (`.reveal` on `#stats-ii`), so keys
/// are resolved per observer rather than through the sink's shared table.
#[derive(Default)]
pub(super) struct ObservedElements {
    pub reveal: Vec<(Element, ElementId)>,
    pub stat_cards: Vec<(Element, ElementId)>,
    pub stats_section: Vec<(Element, ElementId)>,
}

fn select_all(document: &Document, class_name: &str) -> MotionResult<Vec<Element>> {
    let nodes = document
        .query_selector_all(&format!(".{class_name}"))
        .map_err(host_error)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Registers every member of `.class_name` under an indexed key.
fn keyed(sink: &mut WebDomSink, class_name: &str) -> MotionResult<Vec<(ElementId, Element)>> {
    let elements = select_all(sink.document(), class_name)?;
    Ok(elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let key = ElementId::indexed(class_name, index);
            sink.register(key.clone(), element.clone());
            (key, element)
        })
        .collect())
}

fn numeric(
    sink: &mut WebDomSink,
    class_name: &str,
    attribute: &str,
) -> MotionResult<Vec<NumericElement>> {
    Ok(keyed(sink, class_name)?
        .into_iter()
        .map(|(key, element)| NumericElement {
            element: key,
            raw_value: element.get_attribute(attribute).unwrap_or_default(),
        })
        .collect())
}

/// Reads the page structure the controller needs.
pub(super) fn scan(sink: &mut WebDomSink) -> MotionResult<(PageMarkup, ObservedElements)> {
    let mut observed = ObservedElements::default();
    let mut markup = PageMarkup::default();

    for (key, element) in keyed(sink, REVEAL_CLASS)? {
        markup.reveal.push(key.clone());
        observed.reveal.push((element, key));
    }

    markup.counters = numeric(sink, COUNT_CLASS, DATA_TARGET)?;

    for (key, element) in keyed(sink, STAT_CARD_CLASS)? {
        let canvas_id = element
            .query_selector("canvas")
            .map_err(host_error)?
            .map(|canvas| canvas.id())
            .filter(|id| !id.is_empty());
        markup.stat_cards.push(StatCard {
            card: key.clone(),
            canvas_id,
        });
        observed.stat_cards.push((element, key));
    }

    if let Some(section) = sink.document().get_element_by_id(STATS_SECTION_ID) {
        let key = ElementId::new(STATS_SECTION_ID);
        sink.register(key.clone(), section.clone());
        markup.stats_section = Some(key.clone());
        observed.stats_section.push((section, key));
    }

    markup.kpi_numbers = numeric(sink, KPI_NUMBER_CLASS, DATA_TARGET)?;

    for (index, (_, container)) in keyed(sink, CIRCULAR_PROGRESS_CLASS)?.into_iter().enumerate() {
        let ring = container
            .query_selector(&format!(".{PROGRESS_RING_CLASS}"))
            .map_err(host_error)?;
        let number = container
            .query_selector(&format!(".{PROGRESS_NUMBER_CLASS}"))
            .map_err(host_error)?;
        let (Some(ring), Some(number)) = (ring, number) else {
            continue;
        };
        let ring_key = ElementId::indexed(PROGRESS_RING_CLASS, index);
        let number_key = ElementId::indexed(PROGRESS_NUMBER_CLASS, index);
        sink.register(ring_key.clone(), ring);
        sink.register(number_key.clone(), number);
        markup.progress_rings.push(ProgressRing {
            ring: ring_key,
            number: number_key,
            raw_percentage: container.get_attribute(DATA_PERCENTAGE).unwrap_or_default(),
        });
    }

    markup.bar_fills = numeric(sink, BAR_FILL_CLASS, DATA_WIDTH)?;
    markup.industry_bars = numeric(sink, INDUSTRY_BAR_CLASS, DATA_WIDTH)?;

    Ok((markup, observed))
}
