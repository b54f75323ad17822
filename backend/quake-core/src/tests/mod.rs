mod usgs;
