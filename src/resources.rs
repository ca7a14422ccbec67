//! Static assets inlined into every rendered document.

/// Script tag source for the plot engine runtime.
pub(crate) const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Document stylesheet.
pub(crate) const REPORT_CSS: &str = r#"
body{font-family:Arial,Helvetica,sans-serif;margin:0;color:#222;background:#fff;}
.report-header{padding:16px 24px;border-bottom:3px solid #0084a9;}
.report-header h1{margin:0 0 4px 0;font-size:26px;}
.report-logo{max-height:48px;float:right;}
.lead{color:#555;margin:4px 0 0 0;font-size:15px;}
main{padding:16px 24px;max-width:1100px;}
h2{margin:24px 0 8px 0;font-size:20px;}
h3{margin:20px 0 6px 0;font-size:17px;}
.table-wrap{margin:12px 0;}
table.data-table{border-collapse:collapse;width:100%;font-size:13px;}
table.data-table td,table.data-table th{border:1px solid #ddd;padding:4px 8px;text-align:left;}
table.data-table tr:nth-child(even){background-color:#f2f2f2;}
table.data-table tr:hover{background-color:#90c5e7;}
table.data-table th{background-color:#0084a9;color:white;}
table.data-table th.sortable{cursor:pointer;}
.table-filter{margin:4px 0;padding:4px 6px;border:1px solid #ccc;width:220px;}
.table-pager{margin:4px 0;font-size:13px;}
.table-pager button{margin-right:6px;}
.alert{border:1px solid transparent;border-radius:4px;padding:10px 14px;margin:12px 0;}
.alert p{margin:0 0 4px 0;}
.alert-danger{background:#f8d7da;border-color:#f5c2c7;color:#842029;}
.alert-warning{background:#fff3cd;border-color:#ffecb5;color:#664d03;}
.alert-success{background:#d1e7dd;border-color:#badbcc;color:#0f5132;}
.alert-info{background:#cff4fc;border-color:#b6effb;color:#055160;}
"#;

/// Client-side behavior for rendered tables: filter box, column sort and
/// pagination, driven by the per-table options JSON.
pub(crate) const TABLE_JS: &str = r#"
function initTable(id, opts) {
  var table = document.getElementById(id);
  if (!table || !table.tBodies.length) { return; }
  var state = { page: 0, per: opts.perPage || 10, filter: '' };
  var allRows = function () {
    return Array.prototype.slice.call(table.tBodies[0].rows);
  };
  var matching = function () {
    return allRows().filter(function (row) {
      return !state.filter ||
        row.textContent.toLowerCase().indexOf(state.filter) !== -1;
    });
  };
  var pager = null;
  var refresh = function () {
    var rows = matching();
    allRows().forEach(function (row) { row.style.display = 'none'; });
    var start = opts.paging ? state.page * state.per : 0;
    var end = opts.paging ? start + state.per : rows.length;
    rows.slice(start, end).forEach(function (row) { row.style.display = ''; });
    if (pager) {
      var pages = Math.max(1, Math.ceil(rows.length / state.per));
      if (state.page >= pages) { state.page = pages - 1; }
      pager.label.textContent = 'Page ' + (state.page + 1) + ' of ' + pages;
      pager.prev.disabled = state.page === 0;
      pager.next.disabled = state.page >= pages - 1;
    }
  };
  if (opts.sortable) {
    var headers = table.tHead ? table.tHead.rows[0].cells : [];
    Array.prototype.forEach.call(headers, function (th, col) {
      th.className += ' sortable';
      th.addEventListener('click', function () {
        var asc = th.getAttribute('data-asc') !== 'true';
        var rows = allRows();
        rows.sort(function (a, b) {
          var av = a.cells[col].textContent;
          var bv = b.cells[col].textContent;
          var an = parseFloat(av);
          var bn = parseFloat(bv);
          if (!isNaN(an) && !isNaN(bn)) { return asc ? an - bn : bn - an; }
          return asc ? av.localeCompare(bv) : bv.localeCompare(av);
        });
        th.setAttribute('data-asc', asc);
        rows.forEach(function (row) { table.tBodies[0].appendChild(row); });
        refresh();
      });
    });
  }
  if (opts.searchable) {
    var input = document.createElement('input');
    input.type = 'search';
    input.placeholder = 'Filter rows';
    input.className = 'table-filter';
    input.addEventListener('input', function () {
      state.filter = input.value.toLowerCase();
      state.page = 0;
      refresh();
    });
    table.parentNode.insertBefore(input, table);
  }
  if (opts.paging) {
    var bar = document.createElement('div');
    bar.className = 'table-pager';
    var prev = document.createElement('button');
    prev.textContent = 'Previous';
    var next = document.createElement('button');
    next.textContent = 'Next';
    var label = document.createElement('span');
    bar.appendChild(prev);
    bar.appendChild(next);
    bar.appendChild(label);
    prev.addEventListener('click', function () {
      if (state.page > 0) { state.page -= 1; refresh(); }
    });
    next.addEventListener('click', function () { state.page += 1; refresh(); });
    table.parentNode.appendChild(bar);
    pager = { prev: prev, next: next, label: label };
  }
  refresh();
}
"#;
