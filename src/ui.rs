pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Marine Observation Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #e8f1f5;
      --bg-2: #bcd9e8;
      --ink: #1d2b33;
      --accent: #1f7a9c;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #d8e9f0 60%, #eef5f8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #53626b;
      font-size: 1rem;
    }

    .controls {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
      align-items: end;
    }

    .field {
      background: white;
      border-radius: 18px;
      padding: 14px 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .field .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #6e8591;
    }

    select,
    input[type="date"] {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
      color: var(--ink);
      background: white;
      width: 100%;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(31, 122, 156, 0.3);
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.5;
      cursor: default;
    }

    .results {
      display: grid;
      grid-template-columns: minmax(220px, 1fr) minmax(0, 2fr);
      gap: 16px;
    }

    .photo-card,
    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .photo-card h2,
    .chart-header h2 {
      margin: 0 0 10px;
      font-size: 1.2rem;
    }

    .photo-card img {
      width: 100%;
      border-radius: 12px;
      display: block;
    }

    .photo-card .placeholder {
      color: #7c8b94;
      font-size: 0.95rem;
    }

    #chart {
      width: 100%;
      height: 280px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #72808a;
      font-size: 11px;
    }

    .notices {
      display: grid;
      gap: 8px;
      min-height: 1.2em;
    }

    .notice {
      border-radius: 12px;
      padding: 10px 14px;
      font-size: 0.95rem;
      border: 1px solid transparent;
    }

    .notice[data-severity="success"] {
      color: #1f6b43;
      background: rgba(45, 122, 75, 0.1);
      border-color: rgba(45, 122, 75, 0.25);
    }

    .notice[data-severity="error"] {
      color: #a33325;
      background: rgba(198, 59, 43, 0.1);
      border-color: rgba(198, 59, 43, 0.25);
    }

    .hint {
      margin: 0;
      color: #64727b;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 720px) {
      .app {
        padding: 28px 22px;
      }
      .results {
        grid-template-columns: 1fr;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Marine Observation Dashboard</h1>
      <p class="subtitle">Pick a spot, date, hour, and characteristic, then load the matching photo and measurements.</p>
    </header>

    <section class="controls">
      <div class="field">
        <span class="label">Observation spot</span>
        <select id="spot"></select>
      </div>
      <div class="field">
        <span class="label">Date</span>
        <input type="date" id="date" />
      </div>
      <div class="field">
        <span class="label">Interval</span>
        <select id="interval"></select>
      </div>
      <div class="field">
        <span class="label">Characteristic</span>
        <select id="characteristic"></select>
      </div>
      <button id="analyze" type="button" disabled>Show analysis</button>
    </section>

    <section class="results">
      <div class="photo-card">
        <h2>Photo</h2>
        <img id="photo" alt="Observation photo" hidden />
        <p id="photo-placeholder" class="placeholder">No photo loaded yet.</p>
      </div>
      <div class="chart-card">
        <div class="chart-header">
          <h2 id="chart-title">Measurements</h2>
        </div>
        <svg id="chart" viewBox="0 0 600 280" aria-label="Measurement chart" role="img"></svg>
      </div>
    </section>

    <div class="notices" id="notices"></div>
    <p class="hint">Photos are matched to the selected hour; measurements cover the whole selected day.</p>
  </main>

  <script>
    const spotEl = document.getElementById('spot');
    const dateEl = document.getElementById('date');
    const intervalEl = document.getElementById('interval');
    const characteristicEl = document.getElementById('characteristic');
    const analyzeEl = document.getElementById('analyze');
    const photoEl = document.getElementById('photo');
    const photoPlaceholderEl = document.getElementById('photo-placeholder');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const noticesEl = document.getElementById('notices');

    const showNotices = (notices) => {
      for (const notice of notices) {
        const banner = document.createElement('div');
        banner.className = 'notice';
        banner.dataset.severity = notice.severity;
        banner.textContent = `${notice.summary}: ${notice.detail}`;
        noticesEl.appendChild(banner);
        setTimeout(() => banner.remove(), 5000);
      }
    };

    const fillSelect = (select, entries, labelOf) => {
      select.innerHTML = '';
      for (const entry of entries) {
        const option = document.createElement('option');
        option.value = entry.id;
        option.textContent = labelOf(entry);
        select.appendChild(option);
      }
    };

    const formatAxisValue = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const shortLabel = (label) => {
      const text = label.replace('T', ' ');
      return text.length > 10 ? text.slice(5, 16) : text.slice(5);
    };

    const renderLineChart = (chart) => {
      chartTitleEl.textContent = chart.dataset_label || 'Measurements';

      const points = chart.labels.map((label, index) => ({
        label,
        value: Number.parseFloat(chart.values[index])
      })).filter((point) => Number.isFinite(point.value));

      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data</text>';
        return;
      }

      const width = 600;
      const height = 280;
      const paddingX = 48;
      const paddingY = 36;
      const top = 24;

      const values = points.map((point) => point.value);
      let min = Math.min(...values);
      let max = Math.max(...values);
      if (min === max) {
        min -= 1;
        max += 1;
      }

      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${formatAxisValue(value)}</text>`;
      }

      const labelEvery = points.length > 8 ? Math.ceil(points.length / 8) : 1;
      const xLabels = points
        .map((point, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${shortLabel(point.label)}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`)
        .join('');

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `
        ${grid}
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
      `;
    };

    const setPhoto = (url) => {
      if (url) {
        photoEl.src = url;
        photoEl.hidden = false;
        photoPlaceholderEl.hidden = true;
      } else {
        photoEl.removeAttribute('src');
        photoEl.hidden = true;
        photoPlaceholderEl.hidden = false;
      }
    };

    const loadFilters = async () => {
      const res = await fetch('/api/filters');
      if (!res.ok) {
        throw new Error('Unable to load filter lists');
      }
      const data = await res.json();
      fillSelect(characteristicEl, data.characteristics, (entry) => entry.name);
      fillSelect(intervalEl, data.intervals, (entry) => entry.label);
    };

    const loadSpots = async () => {
      const res = await fetch('/api/spots');
      if (!res.ok) {
        throw new Error('Unable to load observation spots');
      }
      const data = await res.json();
      showNotices(data.notices);
      fillSelect(spotEl, data.spots, (entry) => entry.name);
      if (data.spots.length > 0) {
        spotEl.value = data.spots[0].id;
        analyzeEl.disabled = false;
      }
    };

    const showAnalysis = async () => {
      const selectedSpot = spotEl.options[spotEl.selectedIndex];
      const params = new URLSearchParams({
        spot: spotEl.value,
        spot_name: selectedSpot ? selectedSpot.textContent : '',
        date: dateEl.value,
        interval: intervalEl.value,
        characteristic: characteristicEl.value
      });

      const res = await fetch(`/api/analysis?${params}`);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Analysis request failed');
      }

      const data = await res.json();
      setPhoto(data.photo_url);
      renderLineChart(data.chart);
      showNotices(data.notices);
    };

    analyzeEl.addEventListener('click', () => {
      showAnalysis().catch((err) => showNotices([{ severity: 'error', summary: 'Error', detail: err.message }]));
    });

    dateEl.value = new Date().toISOString().slice(0, 10);

    loadFilters()
      .then(loadSpots)
      .catch((err) => showNotices([{ severity: 'error', summary: 'Error', detail: err.message }]));
  </script>
</body>
</html>
"##;
