//! The single HTML page.
//!
//! Layout: header, symbol input with the save button, chart area, favorites
//! list. Plotly.js draws whatever figure the chart route returns. The inline
//! script is the only client logic: it posts the input/list state to the JSON
//! routes and writes the responses back into the page.

macro_rules! plotly_cdn {
    () => {
        "https://cdn.plot.ly/plotly-2.35.2.min.js"
    };
}

/// Plotly.js bundle loaded by the page.
pub const PLOTLY_CDN: &str = plotly_cdn!();

/// Full page served at `/`.
pub const INDEX_HTML: &str = concat!(
    r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Stock Market Tracker</title>
<script src=""##,
    plotly_cdn!(),
    r##""></script>
</head>
<body style="font-family: Arial, sans-serif; background-color: #f4f4f4; padding: 20px;">
  <div style="text-align: center; margin-bottom: 40px;">
    <h1 style="color: #333; font-size: 3rem;">📈 Stock Market Tracker</h1>
    <p style="color: #666; font-size: 1.2rem;">Track real-time stock performance and save your favorite stocks!</p>
  </div>

  <div style="max-width: 600px; margin: 0 auto; text-align: center;">
    <input id="stock-input" type="text" placeholder="Enter Stock Symbol (e.g., AAPL, TSLA)"
      style="width: 100%; padding: 10px; border: 1px solid #ccc; border-radius: 5px; font-size: 1rem;">
    <button id="save-button"
      style="margin-top: 10px; padding: 10px 20px; background-color: #007BFF; color: #fff; border: none; border-radius: 5px; cursor: pointer; font-size: 1rem;">Save to Favorites</button>
  </div>

  <div style="margin-top: 40px;">
    <div id="stock-chart"
      style="border: 1px solid #ccc; border-radius: 10px; background-color: #fff; padding: 20px;"></div>
  </div>

  <div style="margin: 40px auto 0; max-width: 600px; padding: 20px; background-color: #fff; border-radius: 10px; border: 1px solid #ccc;">
    <h2 style="color: #333; font-size: 1.5rem; text-align: center;">⭐ Favorite Stocks</h2>
    <ul id="favorites-list"
      style="list-style-type: none; padding: 0; margin: 0; color: #007BFF; cursor: pointer; font-size: 1.2rem; text-align: center;"></ul>
  </div>

<script>
const input = document.getElementById("stock-input");
const saveButton = document.getElementById("save-button");
const favoritesList = document.getElementById("favorites-list");
let listClicks = 0;

async function postJson(path, body) {
  const response = await fetch(path, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body),
  });
  if (!response.ok) {
    throw new Error(path + " answered " + response.status);
  }
  return response.json();
}

function typedSymbol() {
  return input.value === "" ? null : input.value;
}

function renderedFavorites() {
  return Array.from(favoritesList.children).map((li) => li.textContent);
}

function renderFavorites(response) {
  favoritesList.replaceChildren(...response.favorites.map((entry) => {
    const li = document.createElement("li");
    li.id = entry.id;
    li.textContent = entry.symbol;
    return li;
  }));
}

async function updateChart() {
  const figure = await postJson("/api/chart", {
    symbol: typedSymbol(),
    n_clicks: listClicks === 0 ? null : listClicks,
    favorites: renderedFavorites(),
  });
  Plotly.react("stock-chart", figure.data, figure.layout);
}

input.addEventListener("change", () => updateChart().catch(console.error));
favoritesList.addEventListener("click", () => {
  listClicks += 1;
  updateChart().catch(console.error);
});
saveButton.addEventListener("click", () => {
  postJson("/api/favorites", { symbol: typedSymbol() })
    .then(renderFavorites)
    .catch(console.error);
});

window.addEventListener("load", async () => {
  try {
    const response = await fetch("/api/favorites");
    renderFavorites(await response.json());
  } catch (err) {
    console.error(err);
  }
  updateChart().catch(console.error);
});
</script>
</body>
</html>
"##
);

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_common::net::{CHART_PATH, FAVORITES_PATH};

    #[test]
    fn page_has_every_region() {
        for id in ["stock-input", "save-button", "stock-chart", "favorites-list"] {
            assert!(INDEX_HTML.contains(&format!("id=\"{}\"", id)), "missing {}", id);
        }
        assert!(INDEX_HTML.contains("Save to Favorites"));
        assert!(INDEX_HTML.contains("Enter Stock Symbol (e.g., AAPL, TSLA)"));
    }

    #[test]
    fn script_targets_api_routes() {
        assert!(INDEX_HTML.contains(&format!("\"{}\"", CHART_PATH)));
        assert!(INDEX_HTML.contains(&format!("\"{}\"", FAVORITES_PATH)));
        assert!(INDEX_HTML.contains(&format!("<script src=\"{}\"></script>", PLOTLY_CDN)));
    }
}
