#![allow(non_snake_case)]

use charming::{
  component::{Axis, Grid, Title},
  element::{AreaStyle, AxisType, ItemStyle, TextStyle, Tooltip, Trigger},
  series::Line,
  theme::Theme as ChartTheme,
  Chart, WasmRenderer,
};
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;

use crate::utils::theme::{Theme, ThemeState};

static CANVAS_ID_SALES: &str = "sales-trend";

/// Loads the echarts bundle from CDN once and flips the returned signal when
/// the global is ready; chart components are gated on it so the renderer
/// never races the script tag.
pub fn use_echarts_loader() -> Signal<bool> {
  let mut ready = use_signal(|| false);

  use_future(move || async move {
    let loader = document::eval(
      r#"
      function loadScript(src) {
        return new Promise((resolve, reject) => {
          if (window.echarts) { resolve(); return; }
          const scriptElem = document.createElement('script');
          scriptElem.src = src;
          scriptElem.async = true;
          scriptElem.onload = resolve;
          scriptElem.onerror = () => reject(`Error loading script: ${src}`);
          document.head.appendChild(scriptElem);
        });
      }
      await loadScript('https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js');
      return true;
      "#,
    );
    match loader.await {
      Ok(_) => ready.set(true),
      Err(e) => error!("failed to load echarts: {:?}", e),
    }
  });

  ready
}

#[component]
pub fn SalesTrendChart(points: ReadOnlySignal<Vec<(String, u32)>>) -> Element {
  let app_theme = use_context::<ThemeState>().theme;

  use_effect(move || {
    let (labels, counts): (Vec<String>, Vec<i64>) =
      points().iter().map(|(day, sold)| (day.clone(), *sold as i64)).unzip();

    let renderer = match app_theme() {
      Theme::Dark => WasmRenderer::new(760, 400).theme(ChartTheme::Dark),
      Theme::Light => WasmRenderer::new(760, 400).theme(ChartTheme::Default),
    };

    let chart = Chart::new()
      .title(
        Title::new()
          .text("Tickets per day")
          .text_style(TextStyle::new().font_size(16)),
      )
      .tooltip(Tooltip::new().trigger(Trigger::Axis))
      .grid(Grid::new().left("3%").right("4%").bottom("3%").contain_label(true))
      .x_axis(Axis::new().type_(AxisType::Category).data(labels))
      .y_axis(Axis::new().type_(AxisType::Value).name("Tickets Sold"))
      .series(
        Line::new()
          .name("Tickets")
          .smooth(true)
          .item_style(ItemStyle::new().color("#06b6d4"))
          .area_style(AreaStyle::new().color("rgba(6, 182, 212, 0.25)"))
          .data(counts),
      );

    if let Err(e) = renderer.render(CANVAS_ID_SALES, &chart) {
      warn!("failed to render sales trend chart: {:?}", e);
    }
  });

  rsx! {
    div {
      id: CANVAS_ID_SALES,
      class: "chart-canvas",
      onmounted: move |_evt| {
        document::eval(
          r#"
          var millis = 350;
          setTimeout(function() {
              const element = document.getElementById('sales-trend');
              if (!element) {console.log('no element found');}
              var chart = echarts.getInstanceByDom(element);
              if (!chart) {console.log('no chart found');}
              window.addEventListener('resize', function() {
                  chart.resize();
              });
          }, millis)
          "#,
        );
      }
    }
  }
}
